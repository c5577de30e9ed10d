//! Timeline event entity

use serde::{Deserialize, Serialize};

/// One entry on the exhibit timeline.
///
/// `year` is free-form text and may be a range ("1858-1884", "1930s").
/// Events are displayed in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(
        year: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Accessible name of the timeline element
    pub fn aria_label(&self) -> String {
        format!("Learn more about {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_label() {
        let event = TimelineEvent::new("1945", "The August Revolution", "...");
        assert_eq!(event.aria_label(), "Learn more about The August Revolution");
    }
}
