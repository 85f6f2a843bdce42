use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Soil texture classes offered by the selection control. The first
/// entry is the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SoilType {
    #[default]
    Loamy,
    Sandy,
    Clay,
    Silty,
    Peaty,
    Chalky,
}

impl SoilType {
    /// All soil types, in display order.
    pub fn all() -> [SoilType; 6] {
        [
            Self::Loamy,
            Self::Sandy,
            Self::Clay,
            Self::Silty,
            Self::Peaty,
            Self::Chalky,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loamy => "Loamy",
            Self::Sandy => "Sandy",
            Self::Clay => "Clay",
            Self::Silty => "Silty",
            Self::Peaty => "Peaty",
            Self::Chalky => "Chalky",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown soil type: {0}")]
pub struct UnknownSoilType(pub String);

impl FromStr for SoilType {
    type Err = UnknownSoilType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSoilType(wanted.to_string()))
    }
}

/// Accumulated pipeline state the recommendation prompts draw from.
/// Climate values arrive pre-rounded to one decimal.
#[derive(Debug, Clone)]
pub struct GrowingConditions {
    pub region: String,
    pub avg_temp_c: f64,
    pub avg_rain_mm: f64,
    pub soil: SoilType,
}
