//! CSV edge-list ingestion.
//!
//! Reads records of the form `actor1,layer1,actor2,layer2` and materializes
//! the actors, layers, nodes and the connecting edge for each line. Entities
//! named on several lines are created once; a repeated line is skipped
//! rather than rejected, so a file can be loaded on top of a non-empty
//! network.

use std::path::Path;
use std::sync::Arc;

use ::csv::{ReaderBuilder, Trim};
use tracing::debug;

use plexnet_common::Error;
use plexnet_engine::{Actor, Layer, MlNetwork, Node};

use crate::{AdapterError, AdapterResult};

/// Parsing options for [`load_edge_list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Strip whitespace around fields.
    pub trim: bool,
    /// Directedness given to layers created during the load.
    pub directed_layers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            directed_layers: false,
        }
    }
}

impl CsvOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether whitespace around fields is stripped.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Sets the directedness of layers created during the load.
    #[must_use]
    pub fn with_directed_layers(mut self, directed: bool) -> Self {
        self.directed_layers = directed;
        self
    }
}

/// What a [`load_edge_list`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Records read from the file.
    pub records: usize,
    /// Edges created.
    pub edges_added: usize,
    /// Records skipped because the edge already existed.
    pub edges_skipped: usize,
}

/// Loads an `actor1,layer1,actor2,layer2` edge list into `net`.
///
/// # Errors
///
/// Fails on unreadable or malformed input; store errors other than a
/// duplicate edge propagate as [`AdapterError::Store`].
pub fn load_edge_list(
    net: &mut MlNetwork,
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> AdapterResult<IngestReport> {
    let trim = if options.trim { Trim::All } else { Trim::None };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .trim(trim)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut report = IngestReport::default();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 4 {
            return Err(AdapterError::MalformedRecord {
                line,
                reason: format!("expected 4 fields, got {}", record.len()),
            });
        }
        report.records += 1;

        let from = ensure_node(net, &record[0], &record[1], options)?;
        let to = ensure_node(net, &record[2], &record[3], options)?;
        match net.add_edge(&from, &to) {
            Ok(_) => report.edges_added += 1,
            Err(Error::DuplicateElement(_)) => report.edges_skipped += 1,
            Err(err) => return Err(err.into()),
        }
    }
    debug!(
        records = report.records,
        added = report.edges_added,
        skipped = report.edges_skipped,
        "loaded edge list"
    );
    Ok(report)
}

fn ensure_actor(net: &mut MlNetwork, name: &str) -> AdapterResult<Arc<Actor>> {
    match net.get_actor(name) {
        Some(actor) => Ok(actor),
        None => Ok(net.add_actor(name)?),
    }
}

fn ensure_layer(net: &mut MlNetwork, name: &str, options: &CsvOptions) -> AdapterResult<Arc<Layer>> {
    match net.get_layer(name) {
        Some(layer) => Ok(layer),
        None => Ok(net.add_layer(name, options.directed_layers)?),
    }
}

fn ensure_node(
    net: &mut MlNetwork,
    actor_name: &str,
    layer_name: &str,
    options: &CsvOptions,
) -> AdapterResult<Arc<Node>> {
    let actor = ensure_actor(net, actor_name)?;
    let layer = ensure_layer(net, layer_name, options)?;
    match net.get_node_of(&actor, &layer) {
        Some(node) => Ok(node),
        None => Ok(net.add_node(&actor, &layer)?),
    }
}
