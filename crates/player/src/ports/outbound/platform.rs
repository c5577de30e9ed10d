//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Controller and presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use serde::{Deserialize, Serialize};

/// Viewport measurements
pub trait ViewportProvider: Clone + 'static {
    /// Current viewport width in logical pixels
    fn inner_width(&self) -> f64;
}

/// Document queries and scrolling
pub trait DocumentProvider: Clone + 'static {
    /// Whether an element with this id is present in the document
    fn has_element(&self, element_id: &str) -> bool;

    /// Smoothly scroll the element into view.
    ///
    /// Returns false when the element does not exist.
    fn scroll_into_view(&self, request: &ScrollRequest) -> bool;
}

/// Where the scrolled element ends up relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    /// Align the element's top with the viewport's top
    Start,
    /// Scroll the minimum distance needed to show the element
    Nearest,
}

impl ScrollBlock {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Nearest => "nearest",
        }
    }
}

/// A smooth scroll of one element into view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub element_id: String,
    pub block: ScrollBlock,
}

impl ScrollRequest {
    /// Used for section anchors
    pub fn start(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            block: ScrollBlock::Start,
        }
    }

    /// Used for detail panels and expanded cards
    pub fn nearest(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            block: ScrollBlock::Nearest,
        }
    }
}
