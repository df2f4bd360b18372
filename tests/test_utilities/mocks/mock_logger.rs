use compliance_gate::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ComplianceLogger for testing that captures every log line
#[derive(Default, Clone)]
pub struct MockLogger {
    pub entries: Arc<Mutex<Vec<(LogSeverity, String)>>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn messages_at(&self, severity: LogSeverity) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl ComplianceLogger for MockLogger {
    fn log(&self, severity: LogSeverity, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}
