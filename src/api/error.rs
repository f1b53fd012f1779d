use thiserror::Error;

/// Why a chat round trip failed. The UI collapses every variant into the same
/// fallback message; the distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never completed (connection refused, DNS, reset).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    /// The body decoded but carried an `error` field.
    #[error("chat service reported an error: {0}")]
    Application(String),
}

impl ChatError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
