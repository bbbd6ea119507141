//! # plexnet-adapters
//!
//! Surfaces around the network store that consume only its public API:
//! CSV edge-list ingestion, diagnostic rendering, elementary statistics
//! and path accumulation.
//!
//! ## Modules
//!
//! - [`csv`] - [`CsvOptions`] and [`load_edge_list`]
//! - [`print`] - [`render`] a network's content as text
//! - [`stats`] - mean/stdev and set helpers
//! - [`path`] - [`Path`] edge-sequence accumulator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod csv;
pub mod path;
pub mod print;
pub mod stats;

pub use crate::csv::{load_edge_list, CsvOptions, IngestReport};
pub use crate::path::Path;
pub use crate::print::render;

use plexnet_common::Error;

/// Errors from the ingestion adapters.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The store rejected an operation.
    #[error(transparent)]
    Store(#[from] Error),
    /// The input file could not be read or parsed.
    #[error("csv: {0}")]
    Csv(#[from] ::csv::Error),
    /// A record does not have the expected shape.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line of the offending record.
        line: u64,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result alias for adapter operations.
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;
