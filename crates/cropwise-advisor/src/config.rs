use serde::{Deserialize, Serialize};

/// Generation backend settings. The model identity is process-wide
/// static configuration, never negotiated per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name passed on every generation call.
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds. Generation runs much longer than
    /// the 10 s bound on the geocode/climate calls, so it gets its own
    /// knob.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "phi3".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
