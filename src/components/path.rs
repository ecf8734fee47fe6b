use serde::Deserialize;
use serde::Serialize;

/// A pre-validated geographic coordinate. The binding treats values as
/// opaque; range checking happened at the host boundary.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}
