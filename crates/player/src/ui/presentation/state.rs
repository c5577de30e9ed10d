//! Per-widget state shared through Dioxus context
//!
//! Each widget's controller lives in its own signal. The page root only
//! reaches into the timeline signal, for outside-click dismissal.

use std::sync::Arc;

use dioxus::prelude::*;
use exhibit_domain::Dataset;

use crate::application::{
    MapController, NavMenu, ThemeController, TimelineController, ViewportClass,
};
use crate::config::ExhibitConfig;
use crate::ports::outbound::ScrollRequest;
use crate::ui::use_platform;

#[derive(Clone, Copy)]
pub struct ExhibitState {
    pub timeline: Signal<TimelineController>,
    pub map: Signal<MapController>,
    pub themes: Signal<ThemeController>,
    pub nav: Signal<NavMenu>,
}

impl ExhibitState {
    /// Create the widget state. Must run inside a Dioxus runtime.
    pub fn new(dataset: Arc<Dataset>, config: &ExhibitConfig) -> Self {
        Self {
            timeline: Signal::new(TimelineController::new(dataset.clone())),
            map: Signal::new(MapController::new(dataset.clone(), config.map.clone())),
            themes: Signal::new(ThemeController::new(dataset)),
            nav: Signal::new(NavMenu::default()),
        }
    }
}

pub fn use_exhibit_state() -> ExhibitState {
    use_context::<ExhibitState>()
}

/// Scroll requests wait until the next render has been applied, so the
/// element being revealed is no longer hidden when it is scrolled to.
pub fn use_pending_scroll() -> Signal<Option<ScrollRequest>> {
    let platform = use_platform();
    let mut pending = use_signal(|| None::<ScrollRequest>);

    use_effect(move || {
        if pending.read().is_some() {
            let request = pending.write().take();
            platform.apply_scroll(request.as_ref());
        }
    });

    pending
}

/// Current viewport class, measured when called
pub fn use_viewport_class() -> Callback<(), ViewportClass> {
    let platform = use_platform();
    let breakpoint = use_context::<ExhibitConfig>().mobile_breakpoint_px;
    use_callback(move |()| platform.viewport_class(breakpoint))
}
