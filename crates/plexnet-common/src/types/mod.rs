//! Core type definitions: identifiers and the attribute value model.

pub mod id;
pub mod value;

pub use id::{ActorId, EdgeId, LayerId, NodeId};
pub use value::{AttributeType, AttributeValue};
