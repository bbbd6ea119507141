//! Network store configuration.

/// Construction options for an [`MlNetwork`](crate::MlNetwork).
///
/// All options have sensible defaults; use the `with_*` builders to override
/// individual ones.
///
/// # Example
///
/// ```
/// use plexnet_engine::MlNetworkConfig;
///
/// let config = MlNetworkConfig::new()
///     .with_default_directed(true)
///     .with_node_capacity(1024);
/// assert!(config.default_directed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlNetworkConfig {
    /// Directionality assumed for a layer pair with no explicit policy.
    pub default_directed: bool,
    /// Initial capacity reserved for actors.
    pub actor_capacity: usize,
    /// Initial capacity reserved for nodes.
    pub node_capacity: usize,
    /// Initial capacity reserved for edges.
    pub edge_capacity: usize,
}

impl Default for MlNetworkConfig {
    fn default() -> Self {
        Self {
            default_directed: false,
            actor_capacity: 16,
            node_capacity: 64,
            edge_capacity: 128,
        }
    }
}

impl MlNetworkConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directionality used for layer pairs without an explicit
    /// policy.
    #[must_use]
    pub fn with_default_directed(mut self, directed: bool) -> Self {
        self.default_directed = directed;
        self
    }

    /// Sets the initial actor capacity.
    #[must_use]
    pub fn with_actor_capacity(mut self, capacity: usize) -> Self {
        self.actor_capacity = capacity;
        self
    }

    /// Sets the initial node capacity.
    #[must_use]
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Sets the initial edge capacity.
    #[must_use]
    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}
