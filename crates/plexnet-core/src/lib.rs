//! # plexnet-core
//!
//! Core data structures for Plexnet: the order-statistics index backing
//! every id-sorted collection in the store, and the typed sparse attribute
//! registry. This crate depends only on `plexnet-common`.
//!
//! ## Modules
//!
//! - [`index`] - Index structures ([`RankedStore`])
//! - [`attributes`] - Typed attribute registry ([`AttributeStore`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod index;

pub use attributes::{Attribute, AttributeStore};
pub use index::RankedStore;
