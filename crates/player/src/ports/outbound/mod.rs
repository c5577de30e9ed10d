//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the widget controllers to drive the browser and the mapping
//! library without depending on concrete implementations.

pub mod map_port;
pub mod platform;

pub use map_port::{
    MapCommand, MapError, MapEvent, MapPort, MapViewOptions, MarkerIcon, MarkerOptions,
    PopupOptions, TileLayerOptions,
};
#[cfg(test)]
pub use map_port::MockMapPort;
pub use platform::{DocumentProvider, ScrollBlock, ScrollRequest, ViewportProvider};
