//! The four entity kinds of a multilayer network.
//!
//! Entities are immutable once created and handed out as `Arc` handles: the
//! store and every derived index share the same allocation, and erasing an
//! entity from the store invalidates nothing a caller still holds.

use std::fmt;
use std::sync::Arc;

use arcstr::ArcStr;

use plexnet_common::{ActorId, EdgeId, LayerId, NodeId};

/// A global identity, potentially present in several layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    id: ActorId,
    name: ArcStr,
}

impl Actor {
    pub(crate) fn new(id: ActorId, name: ArcStr) -> Self {
        Self { id, name }
    }

    /// Returns the actor's id.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// Returns the actor's name, unique across the network.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> ArcStr {
        self.name.clone()
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A context in which actors manifest and connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    id: LayerId,
    name: ArcStr,
}

impl Layer {
    pub(crate) fn new(id: LayerId, name: ArcStr) -> Self {
        Self { id, name }
    }

    /// Returns the layer's id.
    #[must_use]
    pub const fn id(&self) -> LayerId {
        self.id
    }

    /// Returns the layer's name, unique across the network.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> ArcStr {
        self.name.clone()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One actor's manifestation inside one layer.
///
/// The node name is unique within its layer, and an actor manifests at most
/// once per layer.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: ArcStr,
    actor: Arc<Actor>,
    layer: Arc<Layer>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: ArcStr, actor: Arc<Actor>, layer: Arc<Layer>) -> Self {
        Self {
            id,
            name,
            actor,
            layer,
        }
    }

    /// Returns the node's id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node's name, unique within its layer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> ArcStr {
        self.name.clone()
    }

    /// Returns the actor this node manifests.
    #[must_use]
    pub fn actor(&self) -> &Arc<Actor> {
        &self.actor
    }

    /// Returns the layer this node lives in.
    #[must_use]
    pub fn layer(&self) -> &Arc<Layer> {
        &self.layer
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.layer.name())
    }
}

/// A connection between two nodes.
///
/// Directedness is fixed at creation time from the policy of the ordered
/// layer pair the endpoints belong to.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    from: Arc<Node>,
    to: Arc<Node>,
    directed: bool,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: Arc<Node>, to: Arc<Node>, directed: bool) -> Self {
        Self {
            id,
            from,
            to,
            directed,
        }
    }

    /// Returns the edge's id.
    #[must_use]
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the source endpoint (first endpoint when undirected).
    #[must_use]
    pub fn from(&self) -> &Arc<Node> {
        &self.from
    }

    /// Returns the target endpoint (second endpoint when undirected).
    #[must_use]
    pub fn to(&self) -> &Arc<Node> {
        &self.to
    }

    /// Returns `true` if the edge is directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} {} {}", self.from, arrow, self.to)
    }
}
