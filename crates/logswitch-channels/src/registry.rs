//! In-memory channel registry.

use std::collections::BTreeMap;

use crate::channel::Channel;
use crate::error::Result;
use crate::traits::{ChannelRegistry, ToggleOutcome};

/// In-memory channel registry with lexicographic snapshot order.
///
/// Channels are keyed by name in a `BTreeMap`, so snapshots iterate in a
/// stable lexicographic order regardless of registration order. Hosts
/// register channels as subsystems come up and deregister them as they are
/// torn down; UI surfaces observe the registry through [`ChannelRegistry`].
#[derive(Debug, Clone, Default)]
pub struct LogChannelRegistry {
    channels: BTreeMap<String, bool>,
}

impl LogChannelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel with an initial state.
    ///
    /// Returns `false` without touching the existing state if a channel with
    /// this name is already registered (first registration wins).
    pub fn register(&mut self, name: impl Into<String>, enabled: bool) -> bool {
        let name = name.into();
        if self.channels.contains_key(&name) {
            return false;
        }
        tracing::debug!("Registered log channel '{}' (enabled={})", name, enabled);
        self.channels.insert(name, enabled);
        true
    }

    /// Remove a channel. Removing an absent name is a no-op returning `false`.
    pub fn deregister(&mut self, name: &str) -> bool {
        let removed = self.channels.remove(name).is_some();
        if removed {
            tracing::debug!("Deregistered log channel '{}'", name);
        }
        removed
    }

    /// Set a channel's state directly. Returns `false` for an unknown name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.channels.get_mut(name) {
            Some(state) => {
                *state = enabled;
                true
            }
            None => false,
        }
    }

    /// Current state of the named channel, if registered.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.channels.get(name).copied()
    }

    /// Whether a channel with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Number of registered channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the registry has no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl ChannelRegistry for LogChannelRegistry {
    fn current_snapshot(&self) -> Result<Vec<Channel>> {
        Ok(self
            .channels
            .iter()
            .map(|(name, enabled)| Channel::new(name.clone(), *enabled))
            .collect())
    }

    fn toggle(&mut self, name: &str) -> ToggleOutcome {
        match self.channels.get_mut(name) {
            Some(state) => {
                *state = !*state;
                tracing::debug!("Toggled log channel '{}' -> {}", name, *state);
                ToggleOutcome::Toggled { enabled: *state }
            }
            None => ToggleOutcome::UnknownChannel,
        }
    }
}
