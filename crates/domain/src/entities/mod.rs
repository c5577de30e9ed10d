//! Exhibit content entities
//!
//! All entities are immutable once the dataset is loaded.

mod map_location;
mod theme_card;
mod timeline_event;

pub use map_location::MapLocation;
pub use theme_card::ThemeCard;
pub use timeline_event::TimelineEvent;
