//! In-memory platform for tests
//!
//! Records scroll requests and answers element lookups from a fixed set of
//! ids, so navigation and scroll behavior can be asserted without a browser.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::ports::outbound::platform::{DocumentProvider, ScrollRequest, ViewportProvider};
use crate::state::Platform;

/// Viewport with a fixed width
#[derive(Clone, Debug)]
pub struct MockViewportProvider {
    pub width: f64,
}

impl ViewportProvider for MockViewportProvider {
    fn inner_width(&self) -> f64 {
        self.width
    }
}

/// Document with a known set of element ids
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    elements: Arc<HashSet<String>>,
    scrolls: Arc<Mutex<Vec<ScrollRequest>>>,
}

impl MockDocumentProvider {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: Arc::new(ids.into_iter().map(Into::into).collect()),
            scrolls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Scroll requests received so far, oldest first
    pub fn scrolls(&self) -> Vec<ScrollRequest> {
        match self.scrolls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn has_element(&self, element_id: &str) -> bool {
        self.elements.contains(element_id)
    }

    fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
        if !self.has_element(&request.element_id) {
            return false;
        }
        match self.scrolls.lock() {
            Ok(mut guard) => guard.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }
        true
    }
}

/// Build a platform from a viewport width and the ids present in the document.
///
/// The returned document handle shares its recorded scrolls with the platform.
pub fn create_mock_platform<I, S>(width: f64, element_ids: I) -> (Platform, MockDocumentProvider)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let document = MockDocumentProvider::with_elements(element_ids);
    let platform = Platform::new(MockViewportProvider { width }, document.clone());
    (platform, document)
}
