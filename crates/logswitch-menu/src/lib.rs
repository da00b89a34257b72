//! Menu synchronization for runtime log-channel toggles.
//!
//! Keeps a menu of channel entries consistent with a channel registry and
//! routes user selections back as toggle requests:
//!
//! - [`host`]: the structural contract a host menu framework provides
//! - [`reset`]: menu subtree teardown utilities
//! - [`sync`]: [`ChannelMenuSync`], the registry-to-menu synchronizer
//! - [`entry`]: entry identity encoding shared by all hosts
//! - [`model`]: an owned menu tree for state-driven menu bars and tests
//! - `native`: a `muda`-backed menu-bar adapter (macOS)
//!
//! The synchronizer pulls: hosts rebuild when the menu is about to open or
//! when the registry changes, and the registry stays the single source of
//! truth for channel state.

pub mod entry;
pub mod error;
pub mod host;
pub mod model;
pub mod reset;
pub mod sync;

#[cfg(target_os = "macos")]
pub mod native;

pub use entry::{EntrySpec, channel_for_entry, entry_id, ids};
pub use error::MenuSyncError;
pub use host::MenuHost;
pub use model::{MenuModel, MenuNodeId};
pub use sync::ChannelMenuSync;
