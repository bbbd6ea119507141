//! Edge-sequence accumulation for traversal algorithms.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use plexnet_common::{Error, Result};
use plexnet_engine::{Edge, Node};

/// A walk through the network: an origin node plus a contiguous sequence
/// of edges.
///
/// Each appended edge must attach to the current end; for undirected edges
/// either endpoint may do so. The path stores `Arc` handles, so it stays
/// readable even after the walked entities are erased from the store.
#[derive(Debug, Clone)]
pub struct Path {
    origin: Arc<Node>,
    steps: Vec<Arc<Edge>>,
    end: Arc<Node>,
}

impl Path {
    /// Creates an empty path anchored at `origin`.
    #[must_use]
    pub fn new(origin: Arc<Node>) -> Self {
        Self {
            end: Arc::clone(&origin),
            origin,
            steps: Vec::new(),
        }
    }

    /// Returns the origin node.
    #[must_use]
    pub fn begin(&self) -> &Arc<Node> {
        &self.origin
    }

    /// Returns the node the path currently ends at.
    #[must_use]
    pub fn end(&self) -> &Arc<Node> {
        &self.end
    }

    /// Appends an edge to the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongParameter`] if neither usable endpoint of the
    /// edge is the current end of the path.
    pub fn step(&mut self, edge: &Arc<Edge>) -> Result<()> {
        let next = if edge.from().id() == self.end.id() {
            Arc::clone(edge.to())
        } else if !edge.is_directed() && edge.to().id() == self.end.id() {
            Arc::clone(edge.from())
        } else {
            return Err(Error::WrongParameter(format!(
                "edge \"{edge}\" does not extend a path ending at \"{}\"",
                self.end
            )));
        };
        self.steps.push(Arc::clone(edge));
        self.end = next;
        Ok(())
    }

    /// Returns the edge at `pos`, in step order.
    #[must_use]
    pub fn step_at(&self, pos: usize) -> Option<&Arc<Edge>> {
        self.steps.get(pos)
    }

    /// Iterates over the path's edges in step order.
    pub fn steps(&self) -> impl Iterator<Item = &Arc<Edge>> {
        self.steps.iter()
    }

    /// Returns the number of edges in the path.
    #[must_use]
    pub fn length(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the path has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.origin.id() == other.origin.id()
            && self.steps.len() == other.steps.len()
            && self
                .steps
                .iter()
                .zip(&other.steps)
                .all(|(a, b)| a.id() == b.id())
    }
}

impl Eq for Path {}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    /// Shorter paths order first; ties break on origin and step ids so the
    /// ordering agrees with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        self.length()
            .cmp(&other.length())
            .then_with(|| self.origin.id().cmp(&other.origin.id()))
            .then_with(|| {
                let a = self.steps.iter().map(|e| e.id());
                let b = other.steps.iter().map(|e| e.id());
                a.cmp(b)
            })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        let mut at = self.origin.id();
        for edge in &self.steps {
            let (arrow, next) = if edge.from().id() == at {
                (if edge.is_directed() { "->" } else { "--" }, edge.to())
            } else {
                ("--", edge.from())
            };
            write!(f, " {arrow} {next}")?;
            at = next.id();
        }
        Ok(())
    }
}
