use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("Decoding raw response error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field in Riot API response: {0}")]
    MissingField(&'static str),

    #[error("Invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the error comes from talking to the Riot API (network, status
    /// or body) rather than from the caller's input.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::RiotApi { .. } | Self::Decode(_)
        )
    }
}
