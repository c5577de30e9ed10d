//! Page components

pub mod anchor_link;
pub mod exhibit_map;
pub mod page_chrome;
pub mod site_nav;
pub mod theme_cards;
pub mod timeline;

pub use anchor_link::AnchorLink;
pub use exhibit_map::MapSection;
pub use page_chrome::{Overview, SiteFooter};
pub use site_nav::SiteNav;
pub use theme_cards::ThemesSection;
pub use timeline::TimelineSection;

/// Section ids, shared by the sections and the navigation links
pub mod section_ids {
    pub const OVERVIEW: &str = "overview";
    pub const TIMELINE: &str = "timeline";
    pub const MAP: &str = "map";
    pub const THEMES: &str = "themes";
}
