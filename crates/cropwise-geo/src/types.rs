use serde::{Deserialize, Serialize};

/// A resolved geographic place: coordinates plus the geocoder's
/// canonical display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}
