use std::fmt;

use serde::{Deserialize, Serialize};

/// Items are addressed by their position in the static dataset, which never
/// changes after startup.
macro_rules! define_index {
    ($name:ident, $entity:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Entity name used in `DomainError::NotFound`.
            pub const ENTITY: &'static str = $entity;

            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_index!(EventIndex, "TimelineEvent");
define_index!(LocationIndex, "MapLocation");
define_index!(CardIndex, "ThemeCard");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_serializes_as_plain_number() {
        let json = serde_json::to_string(&LocationIndex::new(4)).unwrap();
        assert_eq!(json, "4");

        let back: LocationIndex = serde_json::from_str("4").unwrap();
        assert_eq!(back.get(), 4);
    }
}
