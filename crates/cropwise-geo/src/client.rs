//! Forward geocoding: resolve a free-text place name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::config::{CandidateSelection, GeocodeConfig};
use crate::error::GeocodeError;
use crate::types::Place;

const USER_AGENT: &str = "Cropwise/0.1 (https://github.com/cropwise/cropwise)";

pub struct GeocodeClient {
    client: Client,
    base_url: String,
    selection: CandidateSelection,
}

#[derive(Debug, Deserialize)]
struct SearchCandidate {
    lat: Coordinate,
    lon: Coordinate,
    display_name: String,
    #[serde(default)]
    importance: Option<f64>,
}

/// Nominatim encodes coordinates as JSON strings; some deployments
/// return plain numbers. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            selection: config.selection,
        })
    }

    /// Resolve a free-text place name to a single [`Place`].
    ///
    /// An empty result list maps to [`GeocodeError::NotFound`];
    /// transport failures, non-2xx statuses and undecodable bodies are
    /// network-class errors.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, query: &str) -> Result<Place, GeocodeError> {
        let url = format!(
            "{}/search?q={}&format=json",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let candidates: Vec<SearchCandidate> = response
            .json()
            .await
            .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;

        let candidate = self.select(candidates).ok_or(GeocodeError::NotFound)?;

        let latitude = candidate.lat.value().ok_or_else(|| {
            GeocodeError::MalformedResponse("unparseable latitude".to_string())
        })?;
        let longitude = candidate.lon.value().ok_or_else(|| {
            GeocodeError::MalformedResponse("unparseable longitude".to_string())
        })?;

        tracing::info!(latitude, longitude, "resolved to {}", candidate.display_name);

        Ok(Place {
            latitude,
            longitude,
            display_name: candidate.display_name,
        })
    }

    fn select(&self, candidates: Vec<SearchCandidate>) -> Option<SearchCandidate> {
        match self.selection {
            CandidateSelection::FirstResult => candidates.into_iter().next(),
            CandidateSelection::HighestImportance => candidates.into_iter().max_by(|a, b| {
                let ia = a.importance.unwrap_or(0.0);
                let ib = b.importance.unwrap_or(0.0);
                ia.partial_cmp(&ib).unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
    }
}
