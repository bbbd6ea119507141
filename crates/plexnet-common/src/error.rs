//! Error types shared by every Plexnet crate.
//!
//! All failures are precondition violations reportable to the caller; there
//! are no fatal conditions inherent to the store. An operation that fails
//! leaves the store exactly as it was before the call - validation happens
//! before any index is touched.

use thiserror::Error;

/// Result alias used throughout Plexnet.
pub type Result<T> = std::result::Result<T, Error>;

/// The failure taxonomy of the store.
///
/// Callers are expected to catch the specific variant they can tolerate
/// (e.g. [`Error::DuplicateElement`] while re-parsing a file) and propagate
/// everything else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An add operation targeted a name, pair or id already present.
    /// Recoverable: skip, rename, or abort the single operation.
    #[error("duplicate element: {0}")]
    DuplicateElement(String),

    /// A referenced actor, layer, node or attribute does not exist, or an
    /// index/rank lookup was out of bounds.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// An attribute accessor was used with the wrong value type for that
    /// attribute's registered type.
    #[error("operation not supported: {0}")]
    OperationNotSupported(String),

    /// An enumerated parameter held a value outside its valid set.
    #[error("wrong parameter: {0}")]
    WrongParameter(String),
}
