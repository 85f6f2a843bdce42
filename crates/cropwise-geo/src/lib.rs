//! Geocoding for Cropwise.
//!
//! Resolves free-text place names to coordinates via Nominatim
//! (OpenStreetMap) and derives a best-effort region label from the
//! canonical display name.

pub mod client;
pub mod config;
pub mod error;
pub mod region;
pub mod types;

pub use client::GeocodeClient;
pub use config::{CandidateSelection, GeocodeConfig};
pub use error::GeocodeError;
pub use region::extract_region;
pub use types::Place;
