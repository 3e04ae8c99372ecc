//! Service error classifier

use super::rules::{ClassificationRule, STANDARD_RULES};
use crate::core::types::errors::{DispatchError, ErrorKind, ErrorRecord, ServiceFault};
use tracing::debug;

/// Maps service error records to a typed [`DispatchError`]
#[derive(Debug, Clone, Copy)]
pub struct ErrorClassifier {
    rules: &'static [ClassificationRule],
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(STANDARD_RULES)
    }
}

impl ErrorClassifier {
    pub fn new(rules: &'static [ClassificationRule]) -> Self {
        Self { rules }
    }

    /// Kind selected for `errors`, or `None` when the list is empty
    ///
    /// Precedence follows the rule table, not the order of the records: rules
    /// are tried in table order against every reported code, so an
    /// authentication code reported after an invalid-parameter code still yields
    /// [`ErrorKind::Auth`]. When no rule matches the kind is
    /// [`ErrorKind::Service`].
    pub fn kind_of(&self, errors: &[ErrorRecord]) -> Option<ErrorKind> {
        if errors.is_empty() {
            return None;
        }

        let kind = self
            .rules
            .iter()
            .find(|rule| errors.iter().any(|e| rule.matches(&e.code)))
            .map(|rule| rule.kind)
            .unwrap_or(ErrorKind::Service);
        Some(kind)
    }

    /// Classify `errors`; returns `None` when there is nothing to report
    ///
    /// The resulting error always carries every record so no information is lost.
    pub fn classify(&self, errors: &[ErrorRecord]) -> Option<DispatchError> {
        let kind = self.kind_of(errors)?;
        let fault = ServiceFault::from_records(errors.to_vec());
        debug!(?kind, codes = ?fault.codes(), "classified service errors");
        Some(DispatchError::classified(kind, fault))
    }

    /// `Ok(())` for an empty list, the classified error otherwise
    pub fn check(&self, errors: &[ErrorRecord]) -> Result<(), DispatchError> {
        match self.classify(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
