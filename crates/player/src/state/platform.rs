//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` factory in platform/desktop.rs or platform/wasm.rs
//! - Injected into Dioxus context by `main`
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::application::ViewportClass;
use crate::ports::outbound::{DocumentProvider, ScrollRequest, ViewportProvider};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    viewport: Arc<dyn ViewportProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait ViewportProviderDyn: Send + Sync {
    fn inner_width(&self) -> f64;
}

trait DocumentProviderDyn: Send + Sync {
    fn has_element(&self, element_id: &str) -> bool;
    fn scroll_into_view(&self, request: &ScrollRequest) -> bool;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: ViewportProvider + Send + Sync> ViewportProviderDyn for T {
    fn inner_width(&self) -> f64 {
        ViewportProvider::inner_width(self)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn has_element(&self, element_id: &str) -> bool {
        DocumentProvider::has_element(self, element_id)
    }
    fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
        DocumentProvider::scroll_into_view(self, request)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<V, D>(viewport: V, document: D) -> Self
    where
        V: ViewportProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            viewport: Arc::new(viewport),
            document: Arc::new(document),
        }
    }

    // -------------------------------------------------------------------------
    // Viewport operations
    // -------------------------------------------------------------------------

    /// Current viewport width in logical pixels
    pub fn inner_width(&self) -> f64 {
        self.viewport.inner_width()
    }

    /// Classify the current viewport against the mobile breakpoint
    pub fn viewport_class(&self, mobile_breakpoint_px: f64) -> ViewportClass {
        ViewportClass::from_width(self.inner_width(), mobile_breakpoint_px)
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    pub fn has_element(&self, element_id: &str) -> bool {
        self.document.has_element(element_id)
    }

    /// Smoothly scroll an element into view; false if it does not exist
    pub fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
        tracing::trace!(element = %request.element_id, block = request.block.as_str(), "scroll into view");
        self.document.scroll_into_view(request)
    }

    /// Apply an optional scroll produced by a controller transition
    pub fn apply_scroll(&self, request: Option<&ScrollRequest>) {
        if let Some(request) = request {
            if !self.scroll_into_view(request) {
                tracing::warn!(element = %request.element_id, "scroll target not found");
            }
        }
    }
}
