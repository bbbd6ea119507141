//! # plexnet-common
//!
//! Shared leaf crate for Plexnet: typed identifiers, the attribute value
//! model, the error taxonomy and collection aliases. Every other Plexnet
//! crate depends on this one and nothing here depends on the rest.
//!
//! ## Modules
//!
//! - [`types`] - Identifier newtypes and the attribute value model
//! - [`error`] - [`Error`] and the crate-wide [`Result`] alias
//! - [`collections`] - FxHash-backed map/set aliases

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ActorId, AttributeType, AttributeValue, EdgeId, LayerId, NodeId};
