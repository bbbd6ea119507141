//! Identifier types for the entities of a multilayer network.
//!
//! Identifiers are assigned sequentially by the network store and are never
//! reused, even after the entity they named has been erased.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
        )]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Creates a new id from a raw u64 value.
            #[inline]
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw u64 value.
            #[inline]
            #[must_use]
            pub const fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier of an actor: a global identity that may manifest as
    /// a node in multiple layers.
    ActorId
);

define_id!(
    /// Unique identifier of a layer: a named context with its own
    /// directionality default. Every node belongs to exactly one layer.
    LayerId
);

define_id!(
    /// Unique identifier of a node: the manifestation of one actor within
    /// one layer.
    NodeId
);

define_id!(
    /// Unique identifier of an edge between two nodes.
    EdgeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_basic() {
        let id = NodeId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{id:?}"), "NodeId(42)");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_ordering() {
        assert!(ActorId::new(1) < ActorId::new(2));
        assert!(EdgeId::new(10) > EdgeId::new(9));
    }

    #[test]
    fn test_conversions() {
        let layer: LayerId = 7u64.into();
        let raw: u64 = layer.into();
        assert_eq!(raw, 7);
    }
}
