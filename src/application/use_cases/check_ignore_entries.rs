use crate::application::dto::IgnoreCheckRequest;
use crate::compliance::domain::IgnoreCheckOutcome;
use crate::compliance::policies::IgnoreWindowPolicy;
use crate::compliance::services::{IgnoreEntryValidator, IgnoreFileParser};
use crate::ports::outbound::{ComplianceLogger, TextFileReader};
use crate::shared::Result;

/// CheckIgnoreEntriesUseCase - validates the vulnerability suppression file
///
/// # Type Parameters
/// * `FR` - TextFileReader implementation for the ignore file
/// * `L` - ComplianceLogger implementation
pub struct CheckIgnoreEntriesUseCase<FR, L> {
    file_reader: FR,
    logger: L,
}

impl<FR, L> CheckIgnoreEntriesUseCase<FR, L>
where
    FR: TextFileReader,
    L: ComplianceLogger,
{
    pub fn new(file_reader: FR, logger: L) -> Self {
        Self {
            file_reader,
            logger,
        }
    }

    /// Executes the ignore entry check
    ///
    /// Every accepted entry is logged for the audit trail. Validation stops at
    /// the first invalid entry, which is logged as critical.
    ///
    /// # Errors
    /// Returns an error only if the ignore file can't be read
    pub fn execute(&self, request: &IgnoreCheckRequest) -> Result<IgnoreCheckOutcome> {
        self.logger.info(&format!(
            "Checking validity of '{}'",
            request.ignore_file.display()
        ));

        let content = self
            .file_reader
            .read_text(&request.ignore_file, "ignore file")?;
        let groups = IgnoreFileParser::parse(&content);

        let policy = IgnoreWindowPolicy::new(request.max_days).with_warn_days(request.warn_days);
        let outcome = IgnoreEntryValidator::new(policy).validate(&groups, request.today);

        for accepted in outcome.accepted() {
            let group = &accepted.group;
            if accepted.beyond_recommended {
                self.logger.warning(&format!(
                    "{} until date is more than {} days in the future.",
                    group.ids_joined(),
                    request.warn_days
                ));
            }
            self.logger.info(&format!(
                "Ignoring {} until {} ({}d). Reason: {}",
                group.ids_joined(),
                group.until(),
                accepted.remaining_days,
                group.reason()
            ));
        }

        if let IgnoreCheckOutcome::Invalid { failure, .. } = &outcome {
            self.logger.critical(&failure.to_string());
        }

        Ok(outcome)
    }
}
