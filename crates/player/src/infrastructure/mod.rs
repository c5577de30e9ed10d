pub mod leaflet;
pub mod platform;

pub use leaflet::{LeafletBridge, LeafletEvents};
