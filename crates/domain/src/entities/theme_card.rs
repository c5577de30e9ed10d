//! Theme card entity

use serde::{Deserialize, Serialize};

/// An expandable card in the themes section.
///
/// `summary` is always shown; `body` paragraphs are only shown while the
/// card is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCard {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub body: Vec<String>,
}
