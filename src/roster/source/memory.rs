use super::DataSource;
use crate::error::{RosterError, Result};
use crate::model::StudentRecord;

/// Canned records, or a canned failure, for exercising the controller.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<StudentRecord>,
    failure: Option<String>,
}

impl InMemorySource {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A source whose every fetch fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

impl DataSource for InMemorySource {
    fn fetch_all(&self) -> Result<Vec<StudentRecord>> {
        match &self.failure {
            Some(reason) => Err(RosterError::fetch(self.location(), reason)),
            None => Ok(self.records.clone()),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
