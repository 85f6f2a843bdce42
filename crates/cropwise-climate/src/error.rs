//! Climate fetcher error types.
//!
//! A payload that parses but lacks the expected daily series is a
//! distinct failure (`IncompleteData`) from a transport problem.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("climate service returned status {0}")]
    Status(u16),

    #[error("malformed climate response: {0}")]
    MalformedResponse(String),

    #[error("incomplete climate data: {0}")]
    IncompleteData(String),
}

impl ClimateError {
    /// User-friendly message for inline display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Status(_) | Self::MalformedResponse(_) => {
                "Error fetching climate data. Check your connection and try again."
            }
            Self::IncompleteData(_) => {
                "Incomplete climate data received. Please try another location."
            }
        }
    }
}
