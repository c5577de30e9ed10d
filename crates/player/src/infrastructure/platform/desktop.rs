//! Desktop platform implementations
//!
//! The desktop shell renders into a webview, so document operations are
//! forwarded as JavaScript through `dioxus::document::eval`. Viewport width
//! comes from configuration because the webview cannot be queried
//! synchronously.

use dioxus::prelude::*;

use crate::config::{ExhibitConfig, ShellKind};
use crate::ports::outbound::platform::{DocumentProvider, ScrollRequest, ViewportProvider};
use crate::state::Platform;

/// Width assumed for the mobile shell when none is configured
const MOBILE_SHELL_WIDTH: f64 = 390.0;
/// Width assumed for the desktop shell when none is configured
const DESKTOP_SHELL_WIDTH: f64 = 1280.0;

/// Desktop viewport provider with a configured width
#[derive(Clone, Debug)]
pub struct DesktopViewportProvider {
    width: f64,
}

impl DesktopViewportProvider {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn from_config(config: &ExhibitConfig) -> Self {
        let width = config.viewport_width_px.unwrap_or(match config.shell {
            ShellKind::Desktop => DESKTOP_SHELL_WIDTH,
            ShellKind::Mobile => MOBILE_SHELL_WIDTH,
        });
        Self::new(width)
    }
}

impl ViewportProvider for DesktopViewportProvider {
    fn inner_width(&self) -> f64 {
        self.width
    }
}

/// Desktop document provider backed by webview script evaluation
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn has_element(&self, _element_id: &str) -> bool {
        // Not observable synchronously from the host; the map driver reports a
        // missing container as a fault instead.
        true
    }

    fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
        let element_id = match serde_json::to_string(&request.element_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to encode scroll target: {}", e);
                return false;
            }
        };
        let script = format!(
            "const el = document.getElementById({element_id}); \
             if (el) {{ el.scrollIntoView({{ behavior: 'smooth', block: '{}' }}); }}",
            request.block.as_str()
        );
        let _ = document::eval(&script);
        true
    }
}

/// Create platform services for desktop
pub fn create_platform(config: &ExhibitConfig) -> Platform {
    Platform::new(
        DesktopViewportProvider::from_config(config),
        DesktopDocumentProvider,
    )
}
