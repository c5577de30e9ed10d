//! Unified error types for the domain layer
//!
//! The dataset is trusted and static, so these errors only surface at
//! startup (dataset validation) or when a caller addresses an item that
//! does not exist.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., blank text, empty list)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (embedded dataset or configuration payloads)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Coordinate outside the WGS84 range
    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

impl DomainError {
    /// Creates a validation error for dataset rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if event.title.trim().is_empty() {
    ///     return Err(DomainError::validation("timeline event 3 has a blank title"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
