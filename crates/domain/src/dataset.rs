//! Static exhibit dataset
//!
//! The content ships inside the binary as JSON (`data/exhibit.json`) and is
//! parsed and validated once at startup. Edit that file to add, remove, or
//! change timeline events, map locations, or theme cards.

use serde::{Deserialize, Serialize};

use crate::entities::{MapLocation, ThemeCard, TimelineEvent};
use crate::error::DomainError;
use crate::geo::GeoBounds;
use crate::ids::{CardIndex, EventIndex, LocationIndex};

const BUILTIN_DATASET: &str = include_str!("../data/exhibit.json");

/// Everything the exhibit page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub title: String,
    /// Ordered chronologically; display order is dataset order
    pub timeline: Vec<TimelineEvent>,
    pub locations: Vec<MapLocation>,
    #[serde(default)]
    pub themes: Vec<ThemeCard>,
}

impl Dataset {
    /// Load the dataset compiled into the binary
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// Parse and validate a dataset from JSON text
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let dataset: Self = serde_json::from_str(raw)
            .map_err(|e| DomainError::parse(format!("exhibit dataset: {e}")))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the rules the page relies on: every list the page renders a
    /// widget for is non-empty, no text is blank, coordinates are in range.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("dataset title", &self.title)?;

        if self.timeline.is_empty() {
            return Err(DomainError::validation("timeline has no events"));
        }
        for (i, event) in self.timeline.iter().enumerate() {
            require_text(&format!("timeline event {i} year"), &event.year)?;
            require_text(&format!("timeline event {i} title"), &event.title)?;
            require_text(&format!("timeline event {i} description"), &event.description)?;
        }

        if self.locations.is_empty() {
            return Err(DomainError::validation("map has no locations"));
        }
        for (i, location) in self.locations.iter().enumerate() {
            require_text(&format!("map location {i} name"), &location.name)?;
            require_text(&format!("map location {i} description"), &location.description)?;
            if !location.position().is_valid() {
                return Err(DomainError::InvalidCoordinate {
                    lat: location.lat,
                    lng: location.lng,
                });
            }
        }

        for (i, card) in self.themes.iter().enumerate() {
            require_text(&format!("theme card {i} title"), &card.title)?;
            require_text(&format!("theme card {i} summary"), &card.summary)?;
        }

        Ok(())
    }

    pub fn event(&self, index: EventIndex) -> Result<&TimelineEvent, DomainError> {
        self.timeline
            .get(index.get())
            .ok_or_else(|| DomainError::not_found(EventIndex::ENTITY, index.to_string()))
    }

    pub fn location(&self, index: LocationIndex) -> Result<&MapLocation, DomainError> {
        self.locations
            .get(index.get())
            .ok_or_else(|| DomainError::not_found(LocationIndex::ENTITY, index.to_string()))
    }

    pub fn theme(&self, index: CardIndex) -> Result<&ThemeCard, DomainError> {
        self.themes
            .get(index.get())
            .ok_or_else(|| DomainError::not_found(CardIndex::ENTITY, index.to_string()))
    }

    /// Box around every map location
    pub fn location_bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.locations.iter().map(MapLocation::position))
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::validation(format!("{field} is blank")))
    } else {
        Ok(())
    }
}
