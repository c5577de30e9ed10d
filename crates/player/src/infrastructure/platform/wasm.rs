//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using web-sys.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::ExhibitConfig;
use crate::ports::outbound::platform::{
    DocumentProvider, ScrollBlock, ScrollRequest, ViewportProvider,
};
use crate::state::Platform;

/// Used when the window cannot be measured
const FALLBACK_WIDTH: f64 = 1024.0;

/// Browser viewport provider
#[derive(Clone, Default)]
pub struct WasmViewportProvider;

impl ViewportProvider for WasmViewportProvider {
    fn inner_width(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_WIDTH)
    }
}

/// Browser document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl WasmDocumentProvider {
    fn element(element_id: &str) -> Option<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
    }
}

impl DocumentProvider for WasmDocumentProvider {
    fn has_element(&self, element_id: &str) -> bool {
        Self::element(element_id).is_some()
    }

    fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
        let Some(element) = Self::element(&request.element_id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(match request.block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
            ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Create platform services for the browser
pub fn create_platform(_config: &ExhibitConfig) -> Platform {
    Platform::new(WasmViewportProvider, WasmDocumentProvider)
}
