//! Map location entity

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// A place shown as a marker on the exhibit map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub name: String,
    pub description: String,
    /// Latitude in decimal degrees (WGS84)
    pub lat: f64,
    /// Longitude in decimal degrees (WGS84)
    pub lng: f64,
}

impl MapLocation {
    pub fn new(name: impl Into<String>, description: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            lat,
            lng,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
