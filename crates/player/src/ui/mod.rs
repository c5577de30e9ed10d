use std::sync::Arc;

use dioxus::prelude::*;
use exhibit_domain::Dataset;

use crate::config::{ExhibitConfig, ShellKind};
use crate::state::Platform;

pub mod presentation;

use presentation::components::{
    MapSection, Overview, SiteFooter, SiteNav, ThemesSection, TimelineSection,
};
use presentation::state::{use_exhibit_state, ExhibitState};

const EXHIBIT_CSS: Asset = asset!("assets/css/exhibit.css");

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the exhibit dataset from Dioxus context
pub fn use_dataset() -> Arc<Dataset> {
    use_context::<Arc<Dataset>>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let config = use_context::<ExhibitConfig>();
    let dataset = use_dataset();

    // Signals must be created inside an active Dioxus runtime.
    use_context_provider({
        let dataset = dataset.clone();
        let config = config.clone();
        move || ExhibitState::new(dataset, &config)
    });

    rsx! {
        document::Title { "{dataset.title}" }
        document::Stylesheet { href: config.map.leaflet_stylesheet_url.clone() }
        document::Script { src: config.map.leaflet_script_url.clone() }
        document::Stylesheet { href: EXHIBIT_CSS }

        ExhibitPage { shell }
    }
}

#[component]
fn ExhibitPage(shell: ShellKind) -> Element {
    let state = use_exhibit_state();
    let mut timeline = state.timeline;

    let shell_class = match shell {
        ShellKind::Desktop => "exhibit shell-desktop",
        ShellKind::Mobile => "exhibit shell-mobile",
    };

    rsx! {
        div {
            class: shell_class,
            // Target handlers have already run by the time a click bubbles here.
            onclick: move |_| {
                if timeline.write().dismiss_on_outside_click() {
                    tracing::debug!("timeline detail dismissed by outside click");
                }
            },

            SiteNav {}
            main {
                Overview {}
                TimelineSection {}
                MapSection {}
                ThemesSection {}
            }
            SiteFooter {}
        }
    }
}
