//! Session-level error taxonomy.
//!
//! Four recoverable classes reach the user: location not found,
//! network failure, incomplete provider data, and generation backend
//! failure. Every one maps to an inline message; none is fatal to the
//! process, and no failure ever crosses into a later stage's input.

use cropwise_advisor::GenerationError;
use cropwise_climate::ClimateError;
use cropwise_geo::GeocodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("location query is empty")]
    EmptyQuery,

    #[error("no action possible in the current state")]
    NotReady,

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Climate(#[from] ClimateError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl SessionError {
    /// Inline message shown on the interactive surface.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "Enter a location to begin.",
            Self::NotReady => "Resolve a location before requesting recommendations.",
            Self::Geocode(e) => e.user_message(),
            Self::Climate(e) => e.user_message(),
            Self::Generation(e) => e.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_passes_through() {
        let err = SessionError::from(GeocodeError::NotFound);
        assert!(err.user_message().contains("try a different name"));
    }

    #[test]
    fn test_incomplete_climate_passes_through() {
        let err = SessionError::from(ClimateError::IncompleteData("empty".to_string()));
        assert!(err.user_message().contains("Incomplete climate data"));
    }

    #[test]
    fn test_generation_failure_passes_through() {
        let err = SessionError::from(GenerationError::Status(500));
        assert!(err.user_message().contains("generating"));
    }
}
