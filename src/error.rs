use thiserror::Error;

/// Failure of the row store fetch. Surfaced to the caller as-is.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The request never produced a usable response (connect, TLS, decode).
    #[error("{0}")]
    Transport(String),
}

impl StoreError {
    /// HTTP status to answer with. Falls back to 500 when the upstream
    /// status is unknown or not a valid HTTP status.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Upstream { status, .. } if (100..=999).contains(status) => *status,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
