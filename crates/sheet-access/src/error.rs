//! Error types for sheet-access

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheet-access
///
/// Read operations never produce these: a missing cell or unknown defined
/// name is reported as `None`. Errors are reserved for write targets that
/// do not exist and for addresses that cannot be parsed at all.
#[derive(Debug, Error)]
pub enum Error {
    /// Column reference could not be resolved to a 1-based index
    #[error("Invalid column reference: {0}")]
    InvalidColumn(String),

    /// Invalid cell address or range format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Write target does not denote an existing cell
    #[error("Cell not found: {0}")]
    CellNotFound(String),

    /// A defined name's stored address could not be parsed
    #[error("Defined name '{name}' has an unresolvable address: {address}")]
    NameResolution {
        /// The defined name being resolved
        name: String,
        /// The address text stored for it
        address: String,
    },
}
