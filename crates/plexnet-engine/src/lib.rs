//! # plexnet-engine
//!
//! The multilayer network store. An [`MlNetwork`] keeps actors, layers,
//! nodes and edges together with every derived index needed for constant-time
//! lookups by id, name, layer, actor, layer pair and adjacency, plus scoped
//! attribute registries for each entity kind.
//!
//! ## Modules
//!
//! - [`config`] - [`MlNetworkConfig`] construction options
//! - [`entities`] - [`Actor`], [`Layer`], [`Node`], [`Edge`]
//! - [`network`] - [`MlNetwork`] and [`EdgeMode`]
//!
//! ## Example
//!
//! ```
//! use plexnet_engine::{EdgeMode, MlNetwork};
//!
//! let mut net = MlNetwork::new("toy");
//! let alice = net.add_actor("alice").unwrap();
//! let bob = net.add_actor("bob").unwrap();
//! let work = net.add_layer("work", false).unwrap();
//!
//! let n1 = net.add_node(&alice, &work).unwrap();
//! let n2 = net.add_node(&bob, &work).unwrap();
//! net.add_edge(&n1, &n2).unwrap();
//!
//! assert_eq!(net.neighbors(&n1, EdgeMode::InOut).count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod entities;
pub mod network;

pub use config::MlNetworkConfig;
pub use entities::{Actor, Edge, Layer, Node};
pub use network::{EdgeMode, MlNetwork};
