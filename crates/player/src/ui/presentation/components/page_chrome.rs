//! Introduction and footer

use dioxus::prelude::*;

use super::{section_ids, AnchorLink};
use crate::ui::use_dataset;

#[component]
pub fn Overview() -> Element {
    let dataset = use_dataset();
    let events = dataset.timeline.len();
    let places = dataset.locations.len();

    rsx! {
        section { id: section_ids::OVERVIEW, class: "section hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "{dataset.title}" }
                p { class: "hero-subtitle",
                    "{events} moments and {places} places from nearly a century of colonial rule, resistance, and independence."
                }
                AnchorLink {
                    href: format!("#{}", section_ids::TIMELINE),
                    class: "hero-cta",
                    "Explore the timeline"
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "Map data from OpenStreetMap contributors. Map rendering by Leaflet." }
            AnchorLink { href: "#", class: "footer-top", "Back to top" }
        }
    }
}
