//! Top navigation bar with the mobile menu toggle

use dioxus::prelude::*;

use super::section_ids;
use super::AnchorLink;
use crate::ui::presentation::state::use_exhibit_state;
use crate::ui::use_dataset;

struct NavLink {
    target: &'static str,
    label: &'static str,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        target: section_ids::OVERVIEW,
        label: "Overview",
    },
    NavLink {
        target: section_ids::TIMELINE,
        label: "Timeline",
    },
    NavLink {
        target: section_ids::MAP,
        label: "Map",
    },
    NavLink {
        target: section_ids::THEMES,
        label: "Themes",
    },
];

#[component]
pub fn SiteNav() -> Element {
    let dataset = use_dataset();
    let state = use_exhibit_state();
    let mut nav = state.nav;
    let open = nav.read().is_open();

    let menu_class = if open { "nav-menu active" } else { "nav-menu" };
    let toggle_class = if open { "nav-toggle active" } else { "nav-toggle" };

    rsx! {
        nav { class: "site-nav",
            div { class: "nav-container",
                AnchorLink { href: "#", class: "nav-brand", "{dataset.title}" }

                button {
                    class: toggle_class,
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{open}",
                    onclick: move |_| {
                        let open = nav.write().toggle();
                        tracing::debug!(open, "navigation menu toggled");
                    },
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                    span { class: "nav-toggle-bar" }
                }

                ul { class: menu_class,
                    for link in NAV_LINKS.iter() {
                        li { key: "{link.target}",
                            AnchorLink {
                                href: format!("#{}", link.target),
                                class: "nav-link",
                                onnavigate: move |_| nav.write().close(),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
