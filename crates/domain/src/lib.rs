//! Exhibit domain: the static dataset, single-selection state, and map
//! geometry shared by the player UI.

pub mod accordion;
pub mod dataset;
pub mod entities;
pub mod error;
pub mod geo;
pub mod ids;
pub mod selection;

pub use accordion::{Accordion, AccordionChange};
pub use dataset::Dataset;
pub use entities::{MapLocation, ThemeCard, TimelineEvent};
pub use error::DomainError;
pub use geo::{GeoBounds, LatLng, MapView, ViewportSize};
pub use ids::{CardIndex, EventIndex, LocationIndex};
pub use selection::{Selection, SelectionChange};
