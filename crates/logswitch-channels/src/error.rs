//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur when querying a channel registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The registry could not produce a snapshot.
    ///
    /// The in-memory registry never returns this; it exists for registries
    /// backed by fallible stores (shared state, IPC, files).
    #[error("channel registry unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
