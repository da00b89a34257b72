//! Menu entry identity.
//!
//! Entries refer back to their channel through a prefix-encoded id string, a
//! plain copied identifier rather than a reference into registry-owned
//! state. The binding lives in the id itself, so entries carry no lifetime
//! coupling to the registry and are superseded wholesale by the next rebuild.

/// Menu entry identifiers.
pub mod ids {
    /// Prefix for channel entries (followed by the channel name).
    pub const CHANNEL_PREFIX: &str = "log_channel:";

    /// Placeholder entry shown when no channels are registered.
    pub const NO_CHANNELS: &str = "no_channels";
}

/// Description of a single menu entry, produced during rebuild and handed to
/// the host for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    /// Entry identity delivered back by selection events.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Whether the entry renders with a check mark.
    pub checked: bool,
    /// Whether the entry is selectable.
    pub enabled: bool,
}

impl EntrySpec {
    /// Entry for a channel: label is the channel name, the id encodes it.
    pub fn for_channel(name: &str, checked: bool) -> Self {
        Self {
            id: entry_id(name),
            label: name.to_string(),
            checked,
            enabled: true,
        }
    }

    /// Disabled, unchecked placeholder entry.
    pub fn placeholder(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            checked: false,
            enabled: false,
        }
    }
}

/// Encode a channel name as a menu entry id.
pub fn entry_id(channel_name: &str) -> String {
    format!("{}{}", ids::CHANNEL_PREFIX, channel_name)
}

/// Decode a menu entry id back to a channel name.
///
/// Returns `None` for the placeholder and for ids without the channel
/// prefix; the host's event stream also carries items this crate never
/// created.
pub fn channel_for_entry(entry_id: &str) -> Option<&str> {
    entry_id.strip_prefix(ids::CHANNEL_PREFIX)
}
