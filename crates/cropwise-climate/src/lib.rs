//! Historical climate data for Cropwise.
//!
//! Fetches a full prior-calendar-year of daily observations from the
//! Open-Meteo archive API and reduces them to yearly averages.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{archive_range, ClimateClient};
pub use config::ClimateConfig;
pub use error::ClimateError;
pub use types::ClimateSummary;
