//! Session orchestration: the sequential pipeline plus its caches.

use std::sync::Arc;

use cropwise_advisor::{
    GrowingConditions, Recommendation, RecommendationEngine, SoilType, TextGenerator,
};
use cropwise_climate::{ClimateClient, ClimateSummary};
use cropwise_geo::{extract_region, GeocodeClient, Place};

use crate::cache::TtlCache;
use crate::error::SessionError;
use crate::state::{SessionState, SiteBriefing};

/// Cache key for a coordinate pair. Stored as raw bit patterns so the
/// exact floats returned by the geocoder key the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl CoordKey {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            lat_bits: latitude.to_bits(),
            lon_bits: longitude.to_bits(),
        }
    }
}

/// One interactive advisory session.
///
/// Drives the geocode → climate → generation pipeline one user action
/// at a time. Each stage consumes the previous stage's output; a
/// failed stage halts forward progress and no downstream value is
/// constructed. The caches are process-wide collaborators shared
/// across sessions; the generator handle is built once and reused.
pub struct AdvisorSession<G> {
    geocoder: GeocodeClient,
    climate: ClimateClient,
    engine: RecommendationEngine<G>,
    geo_cache: Arc<TtlCache<String, Place>>,
    climate_cache: Arc<TtlCache<CoordKey, ClimateSummary>>,
    state: SessionState,
}

impl<G: TextGenerator> AdvisorSession<G> {
    pub fn new(
        geocoder: GeocodeClient,
        climate: ClimateClient,
        engine: RecommendationEngine<G>,
        geo_cache: Arc<TtlCache<String, Place>>,
        climate_cache: Arc<TtlCache<CoordKey, ClimateSummary>>,
    ) -> Self {
        Self {
            geocoder,
            climate,
            engine,
            geo_cache,
            climate_cache,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the location half of the pipeline: geocode, climate,
    /// region label. Always restarts from scratch, whatever the
    /// current state, so a failed run is retried by re-submitting.
    pub async fn submit_location(&mut self, text: &str) -> Result<SiteBriefing, SessionError> {
        let query = text.trim();
        if query.is_empty() {
            // The pipeline never starts on empty input; state is untouched.
            return Err(SessionError::EmptyQuery);
        }
        let query = query.to_string();

        self.state = SessionState::LocationEntered {
            query: query.clone(),
        };

        let place = match self.lookup_place(&query).await {
            Ok(place) => place,
            Err(e) => return Err(self.fail(e)),
        };
        self.state = SessionState::Geocoded {
            query: query.clone(),
            place: place.clone(),
        };

        let climate = match self.lookup_climate(&place).await {
            Ok(summary) => summary,
            Err(e) => return Err(self.fail(e)),
        };

        let region = extract_region(&place.display_name);
        let briefing = SiteBriefing {
            query,
            place,
            region,
            climate,
        };
        self.state = SessionState::ClimateFetched {
            briefing: briefing.clone(),
        };

        Ok(briefing)
    }

    /// Record the chosen soil type. Valid once a location has been
    /// resolved; choosing again replaces the previous value.
    pub fn choose_soil(&mut self, soil: SoilType) -> Result<(), SessionError> {
        match &self.state {
            SessionState::ClimateFetched { briefing }
            | SessionState::ParametersChosen { briefing, .. } => {
                self.state = SessionState::ParametersChosen {
                    briefing: briefing.clone(),
                    soil,
                };
                Ok(())
            }
            _ => Err(SessionError::NotReady),
        }
    }

    /// Run the generation half of the pipeline. If no soil was ever
    /// chosen, the default (first option) applies.
    pub async fn request_recommendations(&mut self) -> Result<Recommendation, SessionError> {
        let (briefing, soil) = match &self.state {
            SessionState::ParametersChosen { briefing, soil } => (briefing.clone(), *soil),
            SessionState::ClimateFetched { briefing } => (briefing.clone(), SoilType::default()),
            _ => return Err(SessionError::NotReady),
        };

        self.state = SessionState::Generating {
            briefing: briefing.clone(),
            soil,
        };

        let conditions = GrowingConditions {
            region: briefing.region.clone(),
            avg_temp_c: briefing.climate.avg_temp_c,
            avg_rain_mm: briefing.climate.avg_rain_mm,
            soil,
        };

        match self.engine.recommend(&conditions).await {
            Ok(recommendation) => {
                self.state = SessionState::Done {
                    briefing,
                    soil,
                    recommendation: recommendation.clone(),
                };
                Ok(recommendation)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    async fn lookup_place(&self, query: &str) -> Result<Place, SessionError> {
        let key = query.to_string();
        if let Some(hit) = self.geo_cache.get(&key) {
            tracing::debug!(%query, "geocode cache hit");
            return Ok(hit);
        }
        let place = self.geocoder.resolve(query).await?;
        self.geo_cache.insert(key, place.clone());
        Ok(place)
    }

    async fn lookup_climate(&self, place: &Place) -> Result<ClimateSummary, SessionError> {
        let key = CoordKey::new(place.latitude, place.longitude);
        if let Some(hit) = self.climate_cache.get(&key) {
            tracing::debug!("climate cache hit");
            return Ok(hit);
        }
        let summary = self
            .climate
            .yearly_averages(place.latitude, place.longitude)
            .await?;
        self.climate_cache.insert(key, summary);
        Ok(summary)
    }

    fn fail(&mut self, error: SessionError) -> SessionError {
        tracing::warn!(state = self.state.name(), "pipeline halted: {}", error);
        self.state = SessionState::Error {
            message: error.user_message().to_string(),
        };
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_key_equality() {
        assert_eq!(CoordKey::new(18.5204, 73.8567), CoordKey::new(18.5204, 73.8567));
        assert_ne!(CoordKey::new(18.5204, 73.8567), CoordKey::new(18.5205, 73.8567));
    }

    #[test]
    fn test_coord_key_distinguishes_signed_zero() {
        // Bit-pattern keys treat +0.0 and -0.0 as different inputs,
        // which is fine: the geocoder returns one canonical value.
        assert_ne!(CoordKey::new(0.0, 0.0), CoordKey::new(-0.0, 0.0));
    }
}
