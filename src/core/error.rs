use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Every way a run can end early. None of these are retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Must be a valid TikTok URL: {0}")]
    Validation(String),

    #[error("Failed to {action}: {source}")]
    Network {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unable to extract the relay session token")]
    TokenNotFound,

    #[error("Failed to parse response HTML: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RelayError {
    pub(crate) fn network(action: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| RelayError::Network { action, source }
    }

    /// Process exit status for this failure. Zero is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            RelayError::Validation(_) => 2,
            RelayError::Network { .. } => 3,
            RelayError::TokenNotFound => 4,
            RelayError::Parse(_) => 5,
            RelayError::Config(_) => 6,
        }
    }
}
