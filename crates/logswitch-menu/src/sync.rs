//! The channel-menu synchronizer.

use logswitch_channels::{ChannelRegistry, ToggleOutcome};

use crate::entry::{EntrySpec, channel_for_entry, ids};
use crate::error::Result;
use crate::host::MenuHost;
use crate::reset;

/// Keeps a menu's entries consistent with a channel registry and translates
/// selections back into toggle requests.
///
/// The registry is an explicit collaborator handed in at construction, so
/// the synchronizer can be exercised against any [`ChannelRegistry`]
/// implementation. It holds no state between calls beyond that handle: the
/// entry-to-channel bindings live in the entry ids themselves and are
/// superseded wholesale by every rebuild.
///
/// Synchronization is pull-based. Hosts call [`rebuild`] whenever the menu
/// is about to become visible (and on registry-changed events if they have
/// them); the menu may go stale while closed, never while open.
///
/// [`rebuild`]: ChannelMenuSync::rebuild
#[derive(Debug)]
pub struct ChannelMenuSync<R> {
    registry: R,
    empty_placeholder: Option<String>,
}

impl<R: ChannelRegistry> ChannelMenuSync<R> {
    /// Create a synchronizer over the given registry collaborator.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            empty_placeholder: None,
        }
    }

    /// Show a disabled placeholder entry with this label when the registry
    /// has no channels. Off by default.
    pub fn with_empty_placeholder(mut self, label: impl Into<String>) -> Self {
        self.empty_placeholder = Some(label.into());
        self
    }

    /// Shared access to the registry collaborator.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the registry collaborator.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Clear `menu` and repopulate it from the registry's current snapshot.
    ///
    /// One entry per channel, in snapshot order: label = channel name,
    /// checked = channel enabled state. After an `Ok` return the menu
    /// reflects exactly the snapshot just observed.
    ///
    /// # Errors
    ///
    /// Returns [`MenuSyncError::Registry`] when the registry cannot produce
    /// a snapshot; the menu is left cleared and the caller decides what to
    /// show. The next rebuild retries naturally.
    ///
    /// [`MenuSyncError::Registry`]: crate::error::MenuSyncError::Registry
    pub fn rebuild<H: MenuHost>(&self, host: &mut H, menu: &H::Menu) -> Result<()> {
        reset::clear_children(host, menu);

        let snapshot = self.registry.current_snapshot()?;
        tracing::debug!("Rebuilding channel menu with {} channels", snapshot.len());

        if snapshot.is_empty() {
            if let Some(label) = &self.empty_placeholder {
                host.add_child(menu, &EntrySpec::placeholder(ids::NO_CHANNELS, label));
            }
            return Ok(());
        }

        for channel in &snapshot {
            host.add_child(menu, &EntrySpec::for_channel(&channel.name, channel.enabled));
        }
        Ok(())
    }

    /// Route a selection event to the registry as a toggle request.
    ///
    /// The entry id is resolved to a channel name via its prefix; a
    /// resolvable name is toggled. The entry's own checked state is never
    /// mutated here: the registry stays the single source of truth and the
    /// visual state is corrected on the next rebuild.
    ///
    /// Ids that don't resolve (foreign menu items, the placeholder) and
    /// names the registry no longer knows (removed between rebuild and
    /// selection) are discarded with a debug log line. Returns `true` iff a
    /// toggle was issued for a known channel.
    pub fn on_entry_selected(&mut self, entry_id: &str) -> bool {
        let Some(name) = channel_for_entry(entry_id) else {
            tracing::debug!("Ignoring menu event: {}", entry_id);
            return false;
        };

        match self.registry.toggle(name) {
            ToggleOutcome::Toggled { enabled } => {
                tracing::debug!("Channel '{}' toggled -> {}", name, enabled);
                true
            }
            ToggleOutcome::UnknownChannel => {
                tracing::debug!("Discarding selection for removed channel '{}'", name);
                false
            }
        }
    }
}
