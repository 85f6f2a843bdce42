//! Explicit pipeline states.
//!
//! The progression was previously expressible only as nested
//! presence/absence checks; the tagged union makes every state,
//! including `Error` and the terminal `Done`, reachable and testable
//! without any rendering involved.

use cropwise_advisor::{Recommendation, SoilType};
use cropwise_climate::ClimateSummary;
use cropwise_geo::Place;

/// Everything resolved about a location before parameters are chosen.
#[derive(Debug, Clone)]
pub struct SiteBriefing {
    pub query: String,
    pub place: Place,
    pub region: String,
    pub climate: ClimateSummary,
}

/// Session progression. `Error` is reachable from every transition;
/// recovery is always a fresh user action, never an automatic retry.
#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    LocationEntered {
        query: String,
    },
    Geocoded {
        query: String,
        place: Place,
    },
    ClimateFetched {
        briefing: SiteBriefing,
    },
    ParametersChosen {
        briefing: SiteBriefing,
        soil: SoilType,
    },
    Generating {
        briefing: SiteBriefing,
        soil: SoilType,
    },
    Done {
        briefing: SiteBriefing,
        soil: SoilType,
        recommendation: Recommendation,
    },
    Error {
        message: String,
    },
}

impl SessionState {
    /// Stable name for logging and assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LocationEntered { .. } => "location_entered",
            Self::Geocoded { .. } => "geocoded",
            Self::ClimateFetched { .. } => "climate_fetched",
            Self::ParametersChosen { .. } => "parameters_chosen",
            Self::Generating { .. } => "generating",
            Self::Done { .. } => "done",
            Self::Error { .. } => "error",
        }
    }

    /// The resolved briefing, once the climate stage has completed.
    pub fn briefing(&self) -> Option<&SiteBriefing> {
        match self {
            Self::ClimateFetched { briefing }
            | Self::ParametersChosen { briefing, .. }
            | Self::Generating { briefing, .. }
            | Self::Done { briefing, .. } => Some(briefing),
            _ => None,
        }
    }
}
