use serde::{Deserialize, Serialize};

/// Which geocoder candidate to use when several match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSelection {
    /// Take the provider's first result as-is.
    #[default]
    FirstResult,
    /// Prefer the candidate with the highest importance score.
    HighestImportance,
}

/// Geocoder endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeConfig {
    /// Base URL of the Nominatim-compatible endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Candidate selection policy.
    #[serde(default)]
    pub selection: CandidateSelection,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            selection: CandidateSelection::default(),
        }
    }
}
