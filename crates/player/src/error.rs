//! Player error type
//!
//! Errors here are fatal: the page fails fast with a descriptive message
//! rather than rendering a half-wired widget.

use exhibit_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::MapError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExhibitError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Map(#[from] MapError),
}

/// Log a fatal error and abort the page.
pub fn fail_fast(context: &str, error: &ExhibitError) -> ! {
    tracing::error!(error = %error, "{context}");
    panic!("{context}: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_keep_their_message() {
        let err = ExhibitError::from(MapError::Driver("Leaflet failed to load".to_string()));
        assert_eq!(err.to_string(), "Map driver fault: Leaflet failed to load");

        let err = ExhibitError::from(DomainError::not_found("MapLocation", "7"));
        assert!(matches!(err, ExhibitError::Domain(ref e) if e.is_not_found()));
    }

    #[test]
    #[should_panic(expected = "map mount failed: Map container #vietnam-map not found")]
    fn test_fail_fast_panics_with_context() {
        let err = ExhibitError::from(MapError::MissingContainer("vietnam-map".to_string()));
        fail_fast("map mount failed", &err);
    }
}
