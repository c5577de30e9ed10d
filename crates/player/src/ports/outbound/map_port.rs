//! Mapping library port
//!
//! The map widget only places markers and wires selection. Projection,
//! panning, zooming and tile fetching belong to the mapping library behind
//! this port.

use exhibit_domain::{GeoBounds, LatLng, LocationIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the mapping bridge
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Command could not be delivered to the mapping library
    #[error("Map bridge error: {0}")]
    Bridge(String),

    /// The mapping library reported a failure
    #[error("Map driver fault: {0}")]
    Driver(String),

    /// Map container element is not in the document
    #[error("Map container #{0} not found")]
    MissingContainer(String),
}

impl MapError {
    pub fn bridge(msg: impl Into<String>) -> Self {
        Self::Bridge(msg.into())
    }
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewOptions {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
    pub attribution_control: bool,
}

/// Raster tile layer from a templated URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

/// HTML marker icon, sized and anchored in pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub class_name: String,
    pub html: String,
    pub size: [u32; 2],
    pub anchor: [u32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            class_name: "leaflet-custom-marker".to_string(),
            html: r#"<div class="custom-marker-dot"></div>"#.to_string(),
            size: [20, 20],
            anchor: [10, 10],
        }
    }
}

/// Label popup bound to a marker (plain text content)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupOptions {
    pub content: String,
    pub close_button: bool,
    pub class_name: String,
}

impl PopupOptions {
    pub fn label(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            close_button: false,
            class_name: "location-popup".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerOptions {
    pub index: LocationIndex,
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub popup: PopupOptions,
}

/// Commands understood by the map driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapCommand {
    CreateView(MapViewOptions),
    AddTileLayer(TileLayerOptions),
    AddMarker(MarkerOptions),
    SetMarkerActive {
        index: LocationIndex,
        active: bool,
    },
    FitBounds {
        south_west: LatLng,
        north_east: LatLng,
        padding: [u32; 2],
    },
}

/// Events reported by the map driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapEvent {
    /// A marker was clicked
    MarkerClicked { index: LocationIndex },
    /// The map surface (not a marker) was clicked
    MapClicked,
    /// The driver could not carry out a command
    Fault { message: String },
}

/// Capabilities the map widget needs from a mapping library
#[cfg_attr(test, mockall::automock)]
pub trait MapPort {
    /// Create the map view inside its container
    fn create_view(&self, options: &MapViewOptions) -> Result<(), MapError>;

    fn add_tile_layer(&self, layer: &TileLayerOptions) -> Result<(), MapError>;

    /// Place a marker with its icon and bind its label popup
    fn add_marker(&self, marker: &MarkerOptions) -> Result<(), MapError>;

    /// Highlight or un-highlight a marker
    fn set_marker_active(&self, index: LocationIndex, active: bool) -> Result<(), MapError>;

    /// Frame `bounds` with `padding` pixels (x, y) on every side
    fn fit_bounds(&self, bounds: &GeoBounds, padding: [u32; 2]) -> Result<(), MapError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marker_command_wire_format() {
        let command = MapCommand::AddMarker(MarkerOptions {
            index: LocationIndex::new(2),
            position: LatLng {
                lat: 20.9101,
                lng: 107.1839,
            },
            icon: MarkerIcon::default(),
            popup: PopupOptions::label("Hạ Long Bay Region"),
        });

        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["type"], "add_marker");
        assert_eq!(value["index"], 2);
        assert_eq!(value["position"]["lat"], 20.9101);
        assert_eq!(value["icon"]["size"], json!([20, 20]));
        assert_eq!(value["popup"]["close_button"], false);
        assert_eq!(value["popup"]["class_name"], "location-popup");
    }

    #[test]
    fn test_event_wire_format() {
        let marker: MapEvent =
            serde_json::from_value(json!({ "kind": "marker_clicked", "index": 4 })).unwrap();
        assert_eq!(
            marker,
            MapEvent::MarkerClicked {
                index: LocationIndex::new(4)
            }
        );

        let map: MapEvent = serde_json::from_value(json!({ "kind": "map_clicked" })).unwrap();
        assert_eq!(map, MapEvent::MapClicked);

        let fault: MapEvent =
            serde_json::from_value(json!({ "kind": "fault", "message": "no L" })).unwrap();
        assert_eq!(
            fault,
            MapEvent::Fault {
                message: "no L".to_string()
            }
        );
    }
}
