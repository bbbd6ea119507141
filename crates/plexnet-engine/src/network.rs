//! The multilayer network store.
//!
//! [`MlNetwork`] owns all entities and keeps every derived index in sync on
//! each mutation: id-ordered entity stores, name lookups, per-layer and
//! per-actor node indexes, per-layer-pair edge indexes, three adjacency
//! indexes and scoped attribute registries. Erase operations cascade so
//! that no index ever refers to an entity that is gone.
//!
//! All mutation goes through `&mut self`; validation happens before any
//! index is touched, so a failed operation leaves the store unchanged.

use std::fmt;
use std::sync::Arc;

use arcstr::ArcStr;
use tracing::debug;

use plexnet_common::collections::{plex_map, PlexMap};
use plexnet_common::{ActorId, EdgeId, Error, LayerId, NodeId, Result};
use plexnet_core::{AttributeStore, RankedStore};

use crate::config::MlNetworkConfig;
use crate::entities::{Actor, Edge, Layer, Node};

/// Which adjacency direction a neighborhood query covers.
///
/// For an undirected edge both endpoints see each other under every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// Neighbors on incoming or outgoing edges, each neighbor once.
    InOut,
    /// Neighbors on incoming edges.
    In,
    /// Neighbors on outgoing edges.
    Out,
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InOut => write!(f, "in/out"),
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
        }
    }
}

impl TryFrom<i32> for EdgeMode {
    type Error = Error;

    /// Decodes the conventional wire encoding: 0 in/out, 1 in, 2 out.
    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::InOut),
            1 => Ok(Self::In),
            2 => Ok(Self::Out),
            other => Err(Error::WrongParameter(format!("edge mode {other}"))),
        }
    }
}

/// An in-memory multilayer network.
///
/// Actors are global identities, layers are contexts, nodes are actor
/// manifestations inside layers and edges connect nodes. Edge directedness
/// is not chosen per edge: it follows the policy of the ordered layer pair
/// the endpoints belong to, fixed before the first edge between those
/// layers is created.
///
/// Entities are handed out as `Arc` handles; handles held by callers stay
/// valid after the entity is erased from the store, they just no longer
/// resolve through it.
pub struct MlNetwork {
    name: ArcStr,
    config: MlNetworkConfig,

    next_actor_id: u64,
    next_layer_id: u64,
    next_node_id: u64,
    next_edge_id: u64,

    actors_by_id: RankedStore<Arc<Actor>>,
    actors_by_name: PlexMap<ArcStr, Arc<Actor>>,

    layers_by_id: RankedStore<Arc<Layer>>,
    layers_by_name: PlexMap<ArcStr, Arc<Layer>>,
    directionality: PlexMap<(LayerId, LayerId), bool>,

    nodes_by_id: RankedStore<Arc<Node>>,
    nodes_by_layer: PlexMap<LayerId, RankedStore<Arc<Node>>>,
    nodes_by_actor: PlexMap<ActorId, RankedStore<Arc<Node>>>,
    nodes_by_layer_name: PlexMap<LayerId, PlexMap<ArcStr, Arc<Node>>>,
    nodes_by_actor_layer: PlexMap<(ActorId, LayerId), Arc<Node>>,

    edges_by_id: RankedStore<Arc<Edge>>,
    edges_by_layer_pair: PlexMap<(LayerId, LayerId), RankedStore<Arc<Edge>>>,
    // For undirected edges both endpoint orders are present.
    edges_by_endpoints: PlexMap<(NodeId, NodeId), Arc<Edge>>,

    neighbors_out: PlexMap<NodeId, RankedStore<Arc<Node>>>,
    neighbors_in: PlexMap<NodeId, RankedStore<Arc<Node>>>,
    neighbors_all: PlexMap<NodeId, RankedStore<Arc<Node>>>,

    actor_attributes: AttributeStore<ActorId>,
    layer_attributes: AttributeStore<LayerId>,
    node_attributes: PlexMap<LayerId, AttributeStore<NodeId>>,
    edge_attributes: PlexMap<(LayerId, LayerId), AttributeStore<EdgeId>>,
}

impl MlNetwork {
    /// Creates an empty network with default configuration.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_config(name, MlNetworkConfig::default())
    }

    /// Creates an empty network with the given configuration.
    #[must_use]
    pub fn with_config(name: &str, config: MlNetworkConfig) -> Self {
        Self {
            name: ArcStr::from(name),
            next_actor_id: 0,
            next_layer_id: 0,
            next_node_id: 0,
            next_edge_id: 0,
            actors_by_id: RankedStore::with_capacity(config.actor_capacity),
            actors_by_name: plex_map(),
            layers_by_id: RankedStore::new(),
            layers_by_name: plex_map(),
            directionality: plex_map(),
            nodes_by_id: RankedStore::with_capacity(config.node_capacity),
            nodes_by_layer: plex_map(),
            nodes_by_actor: plex_map(),
            nodes_by_layer_name: plex_map(),
            nodes_by_actor_layer: plex_map(),
            edges_by_id: RankedStore::with_capacity(config.edge_capacity),
            edges_by_layer_pair: plex_map(),
            edges_by_endpoints: plex_map(),
            neighbors_out: plex_map(),
            neighbors_in: plex_map(),
            neighbors_all: plex_map(),
            actor_attributes: AttributeStore::new(),
            layer_attributes: AttributeStore::new(),
            node_attributes: plex_map(),
            edge_attributes: plex_map(),
            config,
        }
    }

    /// Returns the network's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // ------------------------------------------------------------------
    // Actors
    // ------------------------------------------------------------------

    /// Registers a new actor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if an actor with this name
    /// already exists.
    pub fn add_actor(&mut self, name: &str) -> Result<Arc<Actor>> {
        if self.actors_by_name.contains_key(name) {
            return Err(Error::DuplicateElement(format!("actor \"{name}\"")));
        }
        self.next_actor_id += 1;
        let actor = Arc::new(Actor::new(ActorId::new(self.next_actor_id), name.into()));
        self.actors_by_id
            .insert(actor.id().as_u64(), Arc::clone(&actor));
        self.actors_by_name
            .insert(actor.name_arc(), Arc::clone(&actor));
        debug!(actor = %actor, "added actor");
        Ok(actor)
    }

    /// Registers a new actor named after its fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if an explicitly named actor
    /// already took the generated name.
    pub fn add_default_actor(&mut self) -> Result<Arc<Actor>> {
        let name = (self.next_actor_id + 1).to_string();
        self.add_actor(&name)
    }

    /// Looks up an actor by name.
    #[must_use]
    pub fn get_actor(&self, name: &str) -> Option<Arc<Actor>> {
        self.actors_by_name.get(name).cloned()
    }

    /// Looks up an actor by id.
    #[must_use]
    pub fn actor_by_id(&self, id: ActorId) -> Option<&Arc<Actor>> {
        self.actors_by_id.get(id.as_u64())
    }

    /// Iterates over all actors in id order.
    pub fn actors(&self) -> impl Iterator<Item = &Arc<Actor>> {
        self.actors_by_id.iter()
    }

    /// Returns the actor at `rank` in id order.
    #[must_use]
    pub fn actor_at(&self, rank: usize) -> Option<&Arc<Actor>> {
        self.actors_by_id.get_at_rank(rank)
    }

    /// Returns the number of actors.
    #[must_use]
    pub fn num_actors(&self) -> usize {
        self.actors_by_id.len()
    }

    // ------------------------------------------------------------------
    // Layers
    // ------------------------------------------------------------------

    /// Registers a new layer; `directed` is the policy for edges inside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if a layer with this name
    /// already exists.
    pub fn add_layer(&mut self, name: &str, directed: bool) -> Result<Arc<Layer>> {
        if self.layers_by_name.contains_key(name) {
            return Err(Error::DuplicateElement(format!("layer \"{name}\"")));
        }
        self.next_layer_id += 1;
        let layer = Arc::new(Layer::new(LayerId::new(self.next_layer_id), name.into()));
        self.layers_by_id
            .insert(layer.id().as_u64(), Arc::clone(&layer));
        self.layers_by_name
            .insert(layer.name_arc(), Arc::clone(&layer));
        self.directionality
            .insert((layer.id(), layer.id()), directed);
        debug!(layer = %layer, directed, "added layer");
        Ok(layer)
    }

    /// Registers a new layer named after its fresh id; `directed` is the
    /// policy for edges inside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if an explicitly named layer
    /// already took the generated name.
    pub fn add_default_layer(&mut self, directed: bool) -> Result<Arc<Layer>> {
        let name = (self.next_layer_id + 1).to_string();
        self.add_layer(&name, directed)
    }

    /// Looks up a layer by name.
    #[must_use]
    pub fn get_layer(&self, name: &str) -> Option<Arc<Layer>> {
        self.layers_by_name.get(name).cloned()
    }

    /// Looks up a layer by id.
    #[must_use]
    pub fn layer_by_id(&self, id: LayerId) -> Option<&Arc<Layer>> {
        self.layers_by_id.get(id.as_u64())
    }

    /// Iterates over all layers in id order.
    pub fn layers(&self) -> impl Iterator<Item = &Arc<Layer>> {
        self.layers_by_id.iter()
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.layers_by_id.len()
    }

    /// Sets the directedness policy for edges between two layers, in both
    /// orders.
    ///
    /// Only edges added afterwards follow the new policy; existing edges
    /// keep the flag resolved at their creation.
    pub fn set_directed(&mut self, layer1: &Arc<Layer>, layer2: &Arc<Layer>, directed: bool) {
        let (l1, l2) = (layer1.id(), layer2.id());
        self.directionality.insert((l1, l2), directed);
        self.directionality.insert((l2, l1), directed);
    }

    /// Returns the directedness policy for edges from `layer1` to `layer2`.
    ///
    /// Falls back to the configured default when no policy has been set.
    #[must_use]
    pub fn is_directed(&self, layer1: &Arc<Layer>, layer2: &Arc<Layer>) -> bool {
        self.directionality
            .get(&(layer1.id(), layer2.id()))
            .copied()
            .unwrap_or(self.config.default_directed)
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Adds a node manifesting `actor` in `layer`, named after the actor.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MlNetwork::add_named_node`].
    pub fn add_node(&mut self, actor: &Arc<Actor>, layer: &Arc<Layer>) -> Result<Arc<Node>> {
        let name = actor.name_arc();
        self.add_named_node(&name, actor, layer)
    }

    /// Adds a node with an explicit name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the actor or layer is not
    /// registered and [`Error::DuplicateElement`] if the name is taken in
    /// the layer or the actor already manifests there.
    pub fn add_named_node(
        &mut self,
        name: &str,
        actor: &Arc<Actor>,
        layer: &Arc<Layer>,
    ) -> Result<Arc<Node>> {
        if !self.actors_by_id.contains(actor.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("actor \"{actor}\"")));
        }
        if !self.layers_by_id.contains(layer.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("layer \"{layer}\"")));
        }
        if self
            .nodes_by_layer_name
            .get(&layer.id())
            .is_some_and(|names| names.contains_key(name))
        {
            return Err(Error::DuplicateElement(format!(
                "node \"{name}\" in layer \"{layer}\""
            )));
        }
        if self
            .nodes_by_actor_layer
            .contains_key(&(actor.id(), layer.id()))
        {
            return Err(Error::DuplicateElement(format!(
                "actor \"{actor}\" already has a node in layer \"{layer}\""
            )));
        }

        self.next_node_id += 1;
        let node = Arc::new(Node::new(
            NodeId::new(self.next_node_id),
            name.into(),
            Arc::clone(actor),
            Arc::clone(layer),
        ));
        self.nodes_by_id
            .insert(node.id().as_u64(), Arc::clone(&node));
        self.nodes_by_layer
            .entry(layer.id())
            .or_default()
            .insert(node.id().as_u64(), Arc::clone(&node));
        self.nodes_by_actor
            .entry(actor.id())
            .or_default()
            .insert(node.id().as_u64(), Arc::clone(&node));
        self.nodes_by_layer_name
            .entry(layer.id())
            .or_default()
            .insert(node.name_arc(), Arc::clone(&node));
        self.nodes_by_actor_layer
            .insert((actor.id(), layer.id()), Arc::clone(&node));
        debug!(node = %node, "added node");
        Ok(node)
    }

    /// Looks up a node by name within a layer.
    #[must_use]
    pub fn get_node(&self, name: &str, layer: &Arc<Layer>) -> Option<Arc<Node>> {
        self.nodes_by_layer_name
            .get(&layer.id())
            .and_then(|names| names.get(name))
            .cloned()
    }

    /// Looks up the node manifesting `actor` in `layer`.
    #[must_use]
    pub fn get_node_of(&self, actor: &Arc<Actor>, layer: &Arc<Layer>) -> Option<Arc<Node>> {
        self.nodes_by_actor_layer
            .get(&(actor.id(), layer.id()))
            .cloned()
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node_by_id(&self, id: NodeId) -> Option<&Arc<Node>> {
        self.nodes_by_id.get(id.as_u64())
    }

    /// Iterates over all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Arc<Node>> {
        self.nodes_by_id.iter()
    }

    /// Iterates over the nodes of one layer in id order.
    pub fn nodes_in(&self, layer: &Arc<Layer>) -> impl Iterator<Item = &Arc<Node>> {
        self.nodes_by_layer.get(&layer.id()).into_iter().flatten()
    }

    /// Iterates over the nodes of one actor across layers, in id order.
    pub fn nodes_of(&self, actor: &Arc<Actor>) -> impl Iterator<Item = &Arc<Node>> {
        self.nodes_by_actor.get(&actor.id()).into_iter().flatten()
    }

    /// Returns the node at `rank` in id order.
    #[must_use]
    pub fn node_at(&self, rank: usize) -> Option<&Arc<Node>> {
        self.nodes_by_id.get_at_rank(rank)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes_by_id.len()
    }

    /// Returns the number of nodes in one layer.
    #[must_use]
    pub fn num_nodes_in(&self, layer: &Arc<Layer>) -> usize {
        self.nodes_by_layer
            .get(&layer.id())
            .map_or(0, RankedStore::len)
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Connects two nodes.
    ///
    /// The edge's directedness follows [`MlNetwork::is_directed`] for the
    /// endpoints' layers at the time of the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if either endpoint is not
    /// registered and [`Error::DuplicateElement`] if the two nodes are
    /// already connected (in this direction, or at all when undirected).
    pub fn add_edge(&mut self, from: &Arc<Node>, to: &Arc<Node>) -> Result<Arc<Edge>> {
        if !self.nodes_by_id.contains(from.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("node \"{from}\"")));
        }
        if !self.nodes_by_id.contains(to.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("node \"{to}\"")));
        }
        if self.edges_by_endpoints.contains_key(&(from.id(), to.id())) {
            return Err(Error::DuplicateElement(format!(
                "edge between \"{from}\" and \"{to}\""
            )));
        }
        let directed = self.is_directed(from.layer(), to.layer());
        let (l1, l2) = (from.layer().id(), to.layer().id());

        self.next_edge_id += 1;
        let edge = Arc::new(Edge::new(
            EdgeId::new(self.next_edge_id),
            Arc::clone(from),
            Arc::clone(to),
            directed,
        ));
        self.edges_by_id
            .insert(edge.id().as_u64(), Arc::clone(&edge));
        self.edges_by_layer_pair
            .entry((l1, l2))
            .or_default()
            .insert(edge.id().as_u64(), Arc::clone(&edge));
        self.edges_by_endpoints
            .insert((from.id(), to.id()), Arc::clone(&edge));
        if !directed {
            self.edges_by_endpoints
                .insert((to.id(), from.id()), Arc::clone(&edge));
        }

        Self::link(&mut self.neighbors_out, from.id(), to);
        Self::link(&mut self.neighbors_in, to.id(), from);
        if !directed {
            Self::link(&mut self.neighbors_out, to.id(), from);
            Self::link(&mut self.neighbors_in, from.id(), to);
        }
        Self::link(&mut self.neighbors_all, from.id(), to);
        Self::link(&mut self.neighbors_all, to.id(), from);

        debug!(edge = %edge, "added edge");
        Ok(edge)
    }

    /// Looks up the edge from one node to another.
    ///
    /// For undirected edges the endpoint order does not matter.
    #[must_use]
    pub fn get_edge(&self, from: &Arc<Node>, to: &Arc<Node>) -> Option<Arc<Edge>> {
        self.edges_by_endpoints.get(&(from.id(), to.id())).cloned()
    }

    /// Looks up an edge by id.
    #[must_use]
    pub fn edge_by_id(&self, id: EdgeId) -> Option<&Arc<Edge>> {
        self.edges_by_id.get(id.as_u64())
    }

    /// Iterates over all edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = &Arc<Edge>> {
        self.edges_by_id.iter()
    }

    /// Iterates over the edges from `layer1` to `layer2` in id order.
    pub fn edges_between(
        &self,
        layer1: &Arc<Layer>,
        layer2: &Arc<Layer>,
    ) -> impl Iterator<Item = &Arc<Edge>> {
        self.edges_by_layer_pair
            .get(&(layer1.id(), layer2.id()))
            .into_iter()
            .flatten()
    }

    /// Returns the edge at `rank` in id order.
    #[must_use]
    pub fn edge_at(&self, rank: usize) -> Option<&Arc<Edge>> {
        self.edges_by_id.get_at_rank(rank)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges_by_id.len()
    }

    // ------------------------------------------------------------------
    // Neighborhoods
    // ------------------------------------------------------------------

    /// Iterates over a node's neighbors under the given mode, in id order.
    ///
    /// A neighbor connected by edges in both directions appears once.
    pub fn neighbors(&self, node: &Arc<Node>, mode: EdgeMode) -> impl Iterator<Item = &Arc<Node>> {
        let map = match mode {
            EdgeMode::InOut => &self.neighbors_all,
            EdgeMode::In => &self.neighbors_in,
            EdgeMode::Out => &self.neighbors_out,
        };
        map.get(&node.id()).into_iter().flatten()
    }

    // ------------------------------------------------------------------
    // Erase cascades
    // ------------------------------------------------------------------

    /// Removes an edge and its attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the edge is not in the store.
    pub fn erase_edge(&mut self, edge: &Arc<Edge>) -> Result<()> {
        if self.edges_by_id.remove(edge.id().as_u64()).is_none() {
            return Err(Error::ElementNotFound(format!("edge \"{edge}\"")));
        }
        let (from, to) = (edge.from(), edge.to());
        let pair = (from.layer().id(), to.layer().id());
        if let Some(store) = self.edges_by_layer_pair.get_mut(&pair) {
            store.remove(edge.id().as_u64());
            if store.is_empty() {
                self.edges_by_layer_pair.remove(&pair);
            }
        }
        self.edges_by_endpoints.remove(&(from.id(), to.id()));
        if !edge.is_directed() {
            self.edges_by_endpoints.remove(&(to.id(), from.id()));
        }

        Self::unlink(&mut self.neighbors_out, from.id(), to.id());
        Self::unlink(&mut self.neighbors_in, to.id(), from.id());
        if !edge.is_directed() {
            Self::unlink(&mut self.neighbors_out, to.id(), from.id());
            Self::unlink(&mut self.neighbors_in, from.id(), to.id());
        }
        // An antiparallel directed edge still makes the two nodes mutual
        // neighbors under InOut.
        if !self.edges_by_endpoints.contains_key(&(to.id(), from.id())) {
            Self::unlink(&mut self.neighbors_all, from.id(), to.id());
            Self::unlink(&mut self.neighbors_all, to.id(), from.id());
        }

        if let Some(store) = self.edge_attributes.get_mut(&pair) {
            store.remove(edge.id());
        }
        debug!(edge = %edge, "erased edge");
        Ok(())
    }

    /// Removes a node, every edge incident to it and its attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the node is not in the store.
    pub fn erase_node(&mut self, node: &Arc<Node>) -> Result<()> {
        if !self.nodes_by_id.contains(node.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("node \"{node}\"")));
        }
        for edge in self.incident_edges(node) {
            self.erase_edge(&edge)?;
        }

        self.nodes_by_id.remove(node.id().as_u64());
        let layer = node.layer().id();
        let actor = node.actor().id();
        if let Some(store) = self.nodes_by_layer.get_mut(&layer) {
            store.remove(node.id().as_u64());
            if store.is_empty() {
                self.nodes_by_layer.remove(&layer);
            }
        }
        if let Some(store) = self.nodes_by_actor.get_mut(&actor) {
            store.remove(node.id().as_u64());
            if store.is_empty() {
                self.nodes_by_actor.remove(&actor);
            }
        }
        if let Some(names) = self.nodes_by_layer_name.get_mut(&layer) {
            names.remove(node.name());
            if names.is_empty() {
                self.nodes_by_layer_name.remove(&layer);
            }
        }
        self.nodes_by_actor_layer.remove(&(actor, layer));

        if let Some(store) = self.node_attributes.get_mut(&layer) {
            store.remove(node.id());
        }
        debug!(node = %node, "erased node");
        Ok(())
    }

    /// Removes an actor, all of its nodes (cascading to their edges) and
    /// its attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the actor is not in the store.
    pub fn erase_actor(&mut self, actor: &Arc<Actor>) -> Result<()> {
        if !self.actors_by_id.contains(actor.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("actor \"{actor}\"")));
        }
        let nodes: Vec<Arc<Node>> = self.nodes_of(actor).cloned().collect();
        for node in &nodes {
            self.erase_node(node)?;
        }
        self.actors_by_id.remove(actor.id().as_u64());
        self.actors_by_name.remove(actor.name());
        self.actor_attributes.remove(actor.id());
        debug!(actor = %actor, "erased actor");
        Ok(())
    }

    /// Removes a layer, all of its nodes (cascading to their edges), its
    /// directionality policies and its attribute registries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if the layer is not in the store.
    pub fn erase_layer(&mut self, layer: &Arc<Layer>) -> Result<()> {
        if !self.layers_by_id.contains(layer.id().as_u64()) {
            return Err(Error::ElementNotFound(format!("layer \"{layer}\"")));
        }
        let nodes: Vec<Arc<Node>> = self.nodes_in(layer).cloned().collect();
        for node in &nodes {
            self.erase_node(node)?;
        }
        let id = layer.id();
        self.layers_by_id.remove(id.as_u64());
        self.layers_by_name.remove(layer.name());
        self.directionality.retain(|(a, b), _| *a != id && *b != id);
        self.layer_attributes.remove(id);
        self.node_attributes.remove(&id);
        self.edge_attributes.retain(|(a, b), _| *a != id && *b != id);
        debug!(layer = %layer, "erased layer");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Returns the actor attribute registry.
    #[must_use]
    pub fn actor_features(&self) -> &AttributeStore<ActorId> {
        &self.actor_attributes
    }

    /// Returns the actor attribute registry for registration and writes.
    pub fn actor_features_mut(&mut self) -> &mut AttributeStore<ActorId> {
        &mut self.actor_attributes
    }

    /// Returns the layer attribute registry.
    #[must_use]
    pub fn layer_features(&self) -> &AttributeStore<LayerId> {
        &self.layer_attributes
    }

    /// Returns the layer attribute registry for registration and writes.
    pub fn layer_features_mut(&mut self) -> &mut AttributeStore<LayerId> {
        &mut self.layer_attributes
    }

    /// Returns the node attribute registry of one layer, creating it on
    /// first use.
    pub fn node_features(&mut self, layer: &Arc<Layer>) -> &mut AttributeStore<NodeId> {
        self.node_attributes.entry(layer.id()).or_default()
    }

    /// Returns the node attribute registry of one layer, if any attribute
    /// was ever registered for it.
    #[must_use]
    pub fn node_features_of(&self, layer: &Arc<Layer>) -> Option<&AttributeStore<NodeId>> {
        self.node_attributes.get(&layer.id())
    }

    /// Returns the edge attribute registry of one ordered layer pair,
    /// creating it on first use.
    ///
    /// The pair is ordered: attributes registered for edges from `layer1`
    /// to `layer2` are distinct from those of the reverse direction.
    pub fn edge_features(
        &mut self,
        layer1: &Arc<Layer>,
        layer2: &Arc<Layer>,
    ) -> &mut AttributeStore<EdgeId> {
        self.edge_attributes
            .entry((layer1.id(), layer2.id()))
            .or_default()
    }

    /// Returns the edge attribute registry of one ordered layer pair, if
    /// any attribute was ever registered for it.
    #[must_use]
    pub fn edge_features_of(
        &self,
        layer1: &Arc<Layer>,
        layer2: &Arc<Layer>,
    ) -> Option<&AttributeStore<EdgeId>> {
        self.edge_attributes.get(&(layer1.id(), layer2.id()))
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Every edge with `node` as an endpoint, each edge once.
    fn incident_edges(&self, node: &Arc<Node>) -> Vec<Arc<Edge>> {
        let mut seen: PlexMap<EdgeId, Arc<Edge>> = plex_map();
        if let Some(out) = self.neighbors_out.get(&node.id()) {
            for other in out {
                if let Some(edge) = self.edges_by_endpoints.get(&(node.id(), other.id())) {
                    seen.insert(edge.id(), Arc::clone(edge));
                }
            }
        }
        if let Some(incoming) = self.neighbors_in.get(&node.id()) {
            for other in incoming {
                if let Some(edge) = self.edges_by_endpoints.get(&(other.id(), node.id())) {
                    seen.insert(edge.id(), Arc::clone(edge));
                }
            }
        }
        seen.into_values().collect()
    }

    fn link(map: &mut PlexMap<NodeId, RankedStore<Arc<Node>>>, node: NodeId, neighbor: &Arc<Node>) {
        map.entry(node)
            .or_default()
            .insert(neighbor.id().as_u64(), Arc::clone(neighbor));
    }

    fn unlink(map: &mut PlexMap<NodeId, RankedStore<Arc<Node>>>, node: NodeId, neighbor: NodeId) {
        if let Some(store) = map.get_mut(&node) {
            store.remove(neighbor.as_u64());
            if store.is_empty() {
                map.remove(&node);
            }
        }
    }
}

impl fmt::Display for MlNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "network \"{}\": {} actors, {} layers, {} nodes, {} edges",
            self.name,
            self.num_actors(),
            self.num_layers(),
            self.num_nodes(),
            self.num_edges()
        )
    }
}
