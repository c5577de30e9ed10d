//! Navigation menu and same-page anchor scrolling

use crate::ports::outbound::ScrollRequest;
use crate::state::Platform;

/// Mobile navigation menu: open or closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any menu link collapses the menu
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// What to do with a clicked link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the default navigation alone
    PassThrough,
    /// Smooth-scroll to the element with this id
    ScrollTo(String),
}

/// `#section` links scroll; the bare `#` (top of page) and anything that is
/// not a same-page anchor pass through.
pub fn classify_anchor(href: &str) -> AnchorAction {
    match href.strip_prefix('#') {
        Some(target) if !target.is_empty() => AnchorAction::ScrollTo(target.to_string()),
        _ => AnchorAction::PassThrough,
    }
}

/// Scroll to the link's target if it exists.
///
/// Returns true when the default jump navigation must be suppressed.
pub fn follow_anchor(href: &str, platform: &Platform) -> bool {
    match classify_anchor(href) {
        AnchorAction::ScrollTo(target) if platform.has_element(&target) => {
            platform.scroll_into_view(&ScrollRequest::start(target))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_classify_anchor() {
        assert_eq!(classify_anchor("#"), AnchorAction::PassThrough);
        assert_eq!(
            classify_anchor("#timeline"),
            AnchorAction::ScrollTo("timeline".to_string())
        );
        assert_eq!(
            classify_anchor("https://www.openstreetmap.org/copyright"),
            AnchorAction::PassThrough
        );
    }

    #[test]
    fn test_follow_anchor_scrolls_to_section_start() {
        let (platform, document) = create_mock_platform(1280.0, ["timeline", "map"]);

        assert!(follow_anchor("#map", &platform));
        assert_eq!(document.scrolls(), vec![ScrollRequest::start("map")]);
    }

    #[test]
    fn test_follow_anchor_passes_through_top_and_missing_targets() {
        let (platform, document) = create_mock_platform(1280.0, ["timeline"]);

        assert!(!follow_anchor("#", &platform));
        assert!(!follow_anchor("#sources", &platform));
        assert!(document.scrolls().is_empty());
    }
}
