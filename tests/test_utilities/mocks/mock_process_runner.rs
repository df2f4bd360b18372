use compliance_gate::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ProcessRunner answering rendered command lines from a script
///
/// Unknown commands fail the way a non-zero exit would.
#[derive(Default, Clone)]
pub struct MockProcessRunner {
    responses: HashMap<String, String>,
    failures: HashMap<String, String>,
    pub invocations: Arc<Mutex<Vec<String>>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), stdout.to_string());
        self
    }

    pub fn with_failure(mut self, command: &str, stderr: &str) -> Self {
        self.failures.insert(command.to_string(), stderr.to_string());
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
        let rendered = command.to_string();
        self.invocations.lock().unwrap().push(rendered.clone());

        if let Some(stdout) = self.responses.get(&rendered) {
            return Ok(CommandOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            });
        }

        Err(ComplianceError::OracleFailure {
            command: rendered.clone(),
            status: "exit status: 1".to_string(),
            output: self
                .failures
                .get(&rendered)
                .cloned()
                .unwrap_or_else(|| format!("no scripted response for {}", rendered)),
        }
        .into())
    }
}
