//! Generation backend error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("generation backend returned status {0}")]
    Status(u16),

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// User-friendly message for inline display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Status(_) | Self::MalformedResponse(_) => {
                "Error generating recommendations. Please try again."
            }
        }
    }
}
