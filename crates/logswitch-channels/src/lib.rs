//! Log-channel data model and registry contract.
//!
//! A *channel* is a named debug-output category that can be switched on and
//! off at runtime. This crate defines the channel data model, the contract a
//! channel registry must satisfy to drive UI surfaces such as menus, and an
//! in-memory registry for hosts that have no richer log manager of their own.
//!
//! # Module Organization
//!
//! - [`channel`]: the [`Channel`] value type
//! - [`traits`]: the [`ChannelRegistry`] contract and [`ToggleOutcome`]
//! - [`registry`]: [`LogChannelRegistry`], the in-memory implementation
//! - [`error`]: registry error types

pub mod channel;
pub mod error;
pub mod registry;
pub mod traits;

pub use channel::Channel;
pub use error::RegistryError;
pub use registry::LogChannelRegistry;
pub use traits::{ChannelRegistry, ToggleOutcome};

/// An ordered view of a registry's channels, produced fresh per query.
///
/// Ordering is part of the registry contract: it determines display order in
/// UI surfaces and must be deterministic for a given registry state.
pub type ChannelSnapshot = Vec<Channel>;
