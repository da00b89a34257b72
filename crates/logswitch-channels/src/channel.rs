//! The channel value type.

use serde::{Deserialize, Serialize};

/// A named debug-output category with an on/off state.
///
/// Channels are owned and mutated by a registry; values of this type are
/// snapshots handed out for display. The `name` is the stable, unique key a
/// UI surface uses to refer back to the channel.
///
/// # Example
///
/// ```
/// use logswitch_channels::Channel;
///
/// let channel = Channel::new("Network", false);
/// assert_eq!(channel.name, "Network");
/// assert!(!channel.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel name.
    pub name: String,
    /// Whether output for this channel is currently active.
    pub enabled: bool,
}

impl Channel {
    /// Create a new channel snapshot value.
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}
