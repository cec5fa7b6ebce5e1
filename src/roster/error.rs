use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("Could not parse student data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RosterError {
    pub fn fetch(location: impl Into<String>, reason: impl ToString) -> Self {
        RosterError::Fetch {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures that happened while loading the roster resource.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            RosterError::Fetch { .. } | RosterError::Parse(_) | RosterError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
