//! Geocoding error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no matches for location query")]
    NotFound,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("geocoding service returned status {0}")]
    Status(u16),

    #[error("malformed geocoder response: {0}")]
    MalformedResponse(String),
}

impl GeocodeError {
    /// User-friendly message for inline display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => {
                "Could not find geographic data for this location. Please try a different name."
            }
            Self::Network(_) | Self::Status(_) | Self::MalformedResponse(_) => {
                "Error fetching location data. Check your connection and try again."
            }
        }
    }
}
