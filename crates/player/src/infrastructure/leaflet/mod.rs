//! Leaflet adapter for [`MapPort`].
//!
//! Leaflet itself is loaded by the page (see `ui::app`). A long-lived script
//! (`driver.js`) is started with `document::eval`; commands are serialized
//! to it as [`MapCommand`] messages and it answers with [`MapEvent`]
//! messages. The same bridge works on web and in the desktop webview.

use dioxus::document::Eval;
use dioxus::prelude::*;
use exhibit_domain::{GeoBounds, LocationIndex};

use crate::ports::outbound::{
    MapCommand, MapError, MapEvent, MapPort, MapViewOptions, MarkerOptions, TileLayerOptions,
};

const DRIVER_JS: &str = include_str!("driver.js");

/// Command side of the Leaflet driver
pub struct LeafletBridge {
    driver: Eval,
}

/// Event side of the Leaflet driver
pub struct LeafletEvents {
    driver: Eval,
}

impl LeafletBridge {
    /// Start the driver script. Must be called inside a Dioxus runtime.
    pub fn start() -> (Self, LeafletEvents) {
        let driver = document::eval(DRIVER_JS);
        (
            Self {
                driver: driver.clone(),
            },
            LeafletEvents { driver },
        )
    }

    fn send(&self, command: MapCommand) -> Result<(), MapError> {
        self.driver
            .send(command)
            .map_err(|e| MapError::bridge(e.to_string()))
    }
}

impl LeafletEvents {
    /// Wait for the next event from the driver
    pub async fn next(&mut self) -> Result<MapEvent, MapError> {
        self.driver
            .recv::<MapEvent>()
            .await
            .map_err(|e| MapError::bridge(e.to_string()))
    }
}

impl MapPort for LeafletBridge {
    fn create_view(&self, options: &MapViewOptions) -> Result<(), MapError> {
        self.send(MapCommand::CreateView(options.clone()))
    }

    fn add_tile_layer(&self, layer: &TileLayerOptions) -> Result<(), MapError> {
        self.send(MapCommand::AddTileLayer(layer.clone()))
    }

    fn add_marker(&self, marker: &MarkerOptions) -> Result<(), MapError> {
        self.send(MapCommand::AddMarker(marker.clone()))
    }

    fn set_marker_active(&self, index: LocationIndex, active: bool) -> Result<(), MapError> {
        self.send(MapCommand::SetMarkerActive { index, active })
    }

    fn fit_bounds(&self, bounds: &GeoBounds, padding: [u32; 2]) -> Result<(), MapError> {
        self.send(MapCommand::FitBounds {
            south_west: bounds.south_west,
            north_east: bounds.north_east,
            padding,
        })
    }
}
