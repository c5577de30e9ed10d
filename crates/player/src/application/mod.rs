//! Widget controllers
//!
//! Each widget owns one controller. Controllers hold the widget's selection
//! state and return transitions; they never touch the document themselves.
//! Components apply the side effects (scrolling, marker highlighting)
//! through the `Platform` and the `MapPort`.

pub mod map;
pub mod navigation;
pub mod themes;
pub mod timeline;

pub use map::{LocationDetail, MapController, MapTransition, MarkerProxy, RenderedMap};
pub use navigation::{classify_anchor, follow_anchor, AnchorAction, NavMenu};
pub use themes::{ThemeCardView, ThemeController, ThemeTransition};
pub use timeline::{TimelineController, TimelineDetail, TimelineItem, TimelineTransition};

/// Element ids shared between controllers (scroll targets) and components
pub mod element_ids {
    pub const TIMELINE_DETAIL: &str = "timeline-detail";
    pub const MAP_DETAIL: &str = "map-detail";

    /// Id of a theme card element
    pub fn theme_card(index: usize) -> String {
        format!("theme-card-{index}")
    }
}

/// Whether the viewport is at or below the mobile breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64, mobile_breakpoint_px: f64) -> Self {
        if width <= mobile_breakpoint_px {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// How an item was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    /// Enter or Space on a focused element
    Keyboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert_eq!(ViewportClass::from_width(768.0, 768.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(390.0, 768.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(769.0, 768.0), ViewportClass::Wide);
    }
}
