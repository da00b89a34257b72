//! Error types for menu synchronization.

use logswitch_channels::RegistryError;
use thiserror::Error;

/// Errors that can occur while synchronizing a menu with the registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MenuSyncError {
    /// The registry collaborator could not produce a snapshot.
    ///
    /// The caller decides whether to show an empty or previous menu state;
    /// no retry happens here, since the next open event rebuilds anyway.
    #[error("menu rebuild failed: {source}")]
    Registry {
        #[from]
        source: RegistryError,
    },
}

/// Result type for menu synchronization operations.
pub type Result<T> = std::result::Result<T, MenuSyncError>;
