use serde::{Deserialize, Serialize};

/// Yearly climate averages for a coordinate, each rounded to one
/// decimal place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClimateSummary {
    /// Mean of the daily maximum temperature series, in °C.
    pub avg_temp_c: f64,
    /// Mean of the daily precipitation-sum series, in mm/year.
    pub avg_rain_mm: f64,
}
