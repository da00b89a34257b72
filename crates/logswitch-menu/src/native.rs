//! Native logging menu built on `muda`.
//!
//! Adapts [`MenuHost`] to `muda` submenus and packages the usual shape of
//! the feature (a "Logging" submenu inside a host's debug menu) as
//! [`LoggingMenu`]. Menu events arrive through `muda`'s global receiver;
//! poll it with `try_recv` from the host event loop and feed channel events
//! to [`LoggingMenu::handle_event`].

use std::collections::HashMap;

use muda::{CheckMenuItem, MenuEvent, MenuId, MenuItem, Submenu};

use logswitch_channels::ChannelRegistry;

use crate::entry::EntrySpec;
use crate::error::Result;
use crate::host::MenuHost;
use crate::reset;
use crate::sync::ChannelMenuSync;

/// Label for the disabled empty-state entry.
const NO_CHANNELS_LABEL: &str = "No Channels";

/// [`MenuHost`] over `muda` submenus.
///
/// `muda` exposes no parent links, so this host records the parent edge
/// whenever a submenu is attached through [`attach_submenu`]; detaching
/// consults that record.
///
/// [`attach_submenu`]: MudaMenuHost::attach_submenu
#[derive(Default)]
pub struct MudaMenuHost {
    parents: HashMap<MenuId, Submenu>,
}

impl MudaMenuHost {
    /// Create a host with no recorded parent edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `child` to `parent` and record the edge for later detaching.
    pub fn attach_submenu(&mut self, parent: &Submenu, child: &Submenu) {
        let _ = parent.append(child);
        self.parents.insert(child.id().clone(), parent.clone());
    }
}

impl MenuHost for MudaMenuHost {
    type Menu = Submenu;

    fn add_child(&mut self, menu: &Submenu, entry: &EntrySpec) {
        if entry.enabled {
            let item =
                CheckMenuItem::with_id(entry.id.as_str(), &entry.label, true, entry.checked, None);
            let _ = menu.append(&item);
        } else {
            let item = MenuItem::with_id(entry.id.as_str(), &entry.label, false, None);
            let _ = menu.append(&item);
        }
    }

    fn remove_all_children(&mut self, menu: &Submenu) {
        while menu.remove_at(0).is_some() {}
    }

    fn parent_of(&self, menu: &Submenu) -> Option<Submenu> {
        self.parents.get(menu.id()).cloned()
    }

    fn remove_child(&mut self, parent: &Submenu, child: &Submenu) {
        let _ = parent.remove(child);
        self.parents.remove(child.id());
    }
}

/// A native submenu of channel toggles, one check item per channel.
///
/// The host owns this value, attaches its submenu wherever its debug menu
/// lives, refreshes it when channels change, and forwards menu events to it.
pub struct LoggingMenu<R: ChannelRegistry> {
    submenu: Submenu,
    host: MudaMenuHost,
    sync: ChannelMenuSync<R>,
}

impl<R: ChannelRegistry> LoggingMenu<R> {
    /// Create a logging menu over the given registry.
    ///
    /// The submenu starts empty; call [`refresh`] once it is attached.
    ///
    /// [`refresh`]: LoggingMenu::refresh
    pub fn new(title: &str, registry: R) -> Self {
        Self {
            submenu: Submenu::new(title, true),
            host: MudaMenuHost::new(),
            sync: ChannelMenuSync::new(registry).with_empty_placeholder(NO_CHANNELS_LABEL),
        }
    }

    /// The underlying submenu, for appending into a parent menu directly.
    pub fn submenu(&self) -> &Submenu {
        &self.submenu
    }

    /// Attach the submenu under `parent`, recording the edge so
    /// [`detach`](LoggingMenu::detach) can undo it.
    pub fn attach_to(&mut self, parent: &Submenu) {
        let submenu = self.submenu.clone();
        self.host.attach_submenu(parent, &submenu);
    }

    /// Remove the submenu from the parent it was attached to, if any.
    pub fn detach(&mut self) -> bool {
        let submenu = self.submenu.clone();
        reset::detach_from_parent(&mut self.host, &submenu)
    }

    /// Rebuild the submenu from the registry's current snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`MenuSyncError::Registry`] when the registry cannot
    /// produce a snapshot.
    ///
    /// [`MenuSyncError::Registry`]: crate::error::MenuSyncError::Registry
    pub fn refresh(&mut self) -> Result<()> {
        let submenu = self.submenu.clone();
        self.sync.rebuild(&mut self.host, &submenu)
    }

    /// Handle a menu event, toggling the selected channel if it is ours.
    ///
    /// Returns `true` if the event was consumed. After a successful toggle
    /// the submenu is refreshed so check marks track registry state.
    pub fn handle_event(&mut self, event: &MenuEvent) -> bool {
        let id = event.id().0.as_str();
        if !self.sync.on_entry_selected(id) {
            return false;
        }
        if let Err(err) = self.refresh() {
            tracing::debug!("Failed to refresh logging menu: {}", err);
        }
        true
    }
}

/// Get the menu event receiver.
///
/// Muda uses crossbeam_channel internally. Call `try_recv()` to poll for
/// events.
pub fn menu_event_receiver() -> crossbeam_channel::Receiver<MenuEvent> {
    MenuEvent::receiver().clone()
}
