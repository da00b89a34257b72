//! Tests for the channel-menu synchronizer.

use std::cell::RefCell;
use std::rc::Rc;

use logswitch_channels::{
    Channel, ChannelRegistry, LogChannelRegistry, RegistryError, ToggleOutcome,
};
use logswitch_menu::{ChannelMenuSync, EntrySpec, MenuHost, MenuModel, MenuNodeId, entry_id, ids};

fn registry(channels: &[(&str, bool)]) -> LogChannelRegistry {
    let mut registry = LogChannelRegistry::new();
    for (name, enabled) in channels {
        registry.register(*name, *enabled);
    }
    registry
}

fn labels(model: &MenuModel, menu: MenuNodeId) -> Vec<String> {
    model
        .entries(menu)
        .iter()
        .map(|entry| entry.label.clone())
        .collect()
}

/// Registry wrapper that records every toggle request it receives.
struct TrackingRegistry {
    inner: LogChannelRegistry,
    toggles: Vec<String>,
}

impl TrackingRegistry {
    fn new(inner: LogChannelRegistry) -> Self {
        Self {
            inner,
            toggles: Vec::new(),
        }
    }
}

impl ChannelRegistry for TrackingRegistry {
    fn current_snapshot(&self) -> Result<Vec<Channel>, RegistryError> {
        self.inner.current_snapshot()
    }

    fn toggle(&mut self, name: &str) -> ToggleOutcome {
        self.toggles.push(name.to_string());
        self.inner.toggle(name)
    }
}

/// Registry that cannot produce snapshots.
struct UnavailableRegistry;

impl ChannelRegistry for UnavailableRegistry {
    fn current_snapshot(&self) -> Result<Vec<Channel>, RegistryError> {
        Err(RegistryError::Unavailable {
            reason: "backing store offline".to_string(),
        })
    }

    fn toggle(&mut self, _name: &str) -> ToggleOutcome {
        ToggleOutcome::UnknownChannel
    }
}

#[test]
fn rebuild_mirrors_snapshot_order_and_state() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let sync = ChannelMenuSync::new(registry(&[("Network", false), ("UI", true)]));

    sync.rebuild(&mut model, &menu).expect("rebuild");

    let entries = model.entries(menu);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Network");
    assert!(!entries[0].checked);
    assert_eq!(entries[1].label, "UI");
    assert!(entries[1].checked);
}

#[test]
fn rebuild_replaces_prior_contents() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");

    // Seed the menu with entries from some earlier life.
    model.add_child(&menu, &EntrySpec::for_channel("Ghost", true));
    model.add_child(&menu, &EntrySpec::for_channel("Stale", false));

    let sync = ChannelMenuSync::new(registry(&[("Audio", true), ("Network", false)]));
    sync.rebuild(&mut model, &menu).expect("rebuild");

    assert_eq!(labels(&model, menu), ["Audio", "Network"]);
}

#[test]
fn rebuild_is_idempotent() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let sync = ChannelMenuSync::new(registry(&[("Network", false), ("UI", true)]));

    sync.rebuild(&mut model, &menu).expect("first rebuild");
    let first: Vec<EntrySpec> = model.entries(menu).to_vec();

    sync.rebuild(&mut model, &menu).expect("second rebuild");
    assert_eq!(model.entries(menu), first);
}

#[test]
fn selection_issues_exactly_one_toggle() {
    let mut sync = ChannelMenuSync::new(TrackingRegistry::new(registry(&[
        ("Network", false),
        ("UI", true),
    ])));

    assert!(sync.on_entry_selected(&entry_id("Network")));

    assert_eq!(sync.registry().toggles, ["Network"]);
    assert_eq!(sync.registry().inner.is_enabled("Network"), Some(true));
    assert_eq!(sync.registry().inner.is_enabled("UI"), Some(true));
}

#[test]
fn stale_selection_is_discarded() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let mut sync = ChannelMenuSync::new(registry(&[("Network", false), ("UI", true)]));
    sync.rebuild(&mut model, &menu).expect("rebuild");

    // Channel removed between rebuild and selection.
    let stale_id = model.entries(menu)[0].id.clone();
    sync.registry_mut().deregister("Network");

    assert!(!sync.on_entry_selected(&stale_id));
    assert_eq!(sync.registry().is_enabled("UI"), Some(true));
}

#[test]
fn foreign_event_ids_are_ignored() {
    let mut sync = ChannelMenuSync::new(registry(&[("Network", false)]));

    assert!(!sync.on_entry_selected("open_study"));
    assert!(!sync.on_entry_selected(ids::NO_CHANNELS));
    assert_eq!(sync.registry().is_enabled("Network"), Some(false));
}

#[test]
fn registry_failure_surfaces_and_leaves_menu_cleared() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    model.add_child(&menu, &EntrySpec::for_channel("Ghost", true));

    let sync = ChannelMenuSync::new(UnavailableRegistry);
    let result = sync.rebuild(&mut model, &menu);

    assert!(result.is_err());
    assert!(!model.has_children(menu));
}

#[test]
fn placeholder_shown_only_for_empty_snapshot() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let mut sync =
        ChannelMenuSync::new(LogChannelRegistry::new()).with_empty_placeholder("No Channels");

    sync.rebuild(&mut model, &menu).expect("rebuild");
    let entries = model.entries(menu);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "No Channels");
    assert!(!entries[0].enabled);

    // Selecting the placeholder does nothing.
    let placeholder_id = entries[0].id.clone();
    assert!(!sync.on_entry_selected(&placeholder_id));

    // Once a channel exists the placeholder disappears.
    sync.registry_mut().register("Network", false);
    sync.rebuild(&mut model, &menu).expect("rebuild");
    assert_eq!(labels(&model, menu), ["Network"]);
}

#[test]
fn no_placeholder_by_default() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let sync = ChannelMenuSync::new(LogChannelRegistry::new());

    sync.rebuild(&mut model, &menu).expect("rebuild");
    assert!(!model.has_children(menu));
}

#[test]
fn shared_registry_mutations_show_up_on_rebuild() {
    let shared = Rc::new(RefCell::new(registry(&[("Network", false), ("UI", true)])));
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let sync = ChannelMenuSync::new(Rc::clone(&shared));

    sync.rebuild(&mut model, &menu).expect("rebuild");
    assert_eq!(labels(&model, menu), ["Network", "UI"]);

    // The host adds and removes channels elsewhere; the next rebuild tracks it.
    shared.borrow_mut().deregister("Network");
    shared.borrow_mut().register("Audio", true);

    sync.rebuild(&mut model, &menu).expect("rebuild");
    assert_eq!(labels(&model, menu), ["Audio", "UI"]);
}

#[test]
fn toggle_then_rebuild_scenario() {
    let mut model = MenuModel::new();
    let menu = model.add_menu("Logging");
    let mut sync = ChannelMenuSync::new(registry(&[("Network", false), ("UI", true)]));

    sync.rebuild(&mut model, &menu).expect("rebuild");
    assert!(!model.entries(menu)[0].checked);
    assert!(model.entries(menu)[1].checked);

    // Selecting "Network" toggles the registry but not the live entry.
    assert!(sync.on_entry_selected(&entry_id("Network")));
    assert!(!model.entries(menu)[0].checked);
    assert_eq!(sync.registry().is_enabled("Network"), Some(true));

    // The next rebuild corrects the visual state.
    sync.rebuild(&mut model, &menu).expect("rebuild");
    assert!(model.entries(menu)[0].checked);
    assert!(model.entries(menu)[1].checked);
}
