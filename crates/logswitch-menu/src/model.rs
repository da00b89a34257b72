//! Owned in-memory menu tree.
//!
//! Backing model for state-driven in-app menu bars, and the reference
//! [`MenuHost`] this crate's tests run against.

use crate::entry::EntrySpec;
use crate::host::MenuHost;

/// Handle to a node in a [`MenuModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuNodeId(usize);

#[derive(Debug)]
struct MenuNode {
    label: String,
    parent: Option<MenuNodeId>,
    submenus: Vec<MenuNodeId>,
    entries: Vec<EntrySpec>,
}

/// Owned menu tree addressed by [`MenuNodeId`] handles.
///
/// Nodes live in an arena; detaching a subtree leaves its nodes allocated
/// but unreachable, which is acceptable at menu scale.
#[derive(Debug, Default)]
pub struct MenuModel {
    nodes: Vec<MenuNode>,
}

impl MenuModel {
    /// Create an empty menu tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root-level menu node.
    pub fn add_menu(&mut self, label: impl Into<String>) -> MenuNodeId {
        self.push(label.into(), None)
    }

    /// Create a menu node attached under `parent`.
    pub fn add_submenu(&mut self, parent: MenuNodeId, label: impl Into<String>) -> MenuNodeId {
        let id = self.push(label.into(), Some(parent));
        self.nodes[parent.0].submenus.push(id);
        id
    }

    fn push(&mut self, label: String, parent: Option<MenuNodeId>) -> MenuNodeId {
        let id = MenuNodeId(self.nodes.len());
        self.nodes.push(MenuNode {
            label,
            parent,
            submenus: Vec::new(),
            entries: Vec::new(),
        });
        id
    }

    /// The node's display label.
    pub fn label(&self, menu: MenuNodeId) -> &str {
        &self.nodes[menu.0].label
    }

    /// The node's entries, in display order.
    pub fn entries(&self, menu: MenuNodeId) -> &[EntrySpec] {
        &self.nodes[menu.0].entries
    }

    /// The node's attached submenus, in display order.
    pub fn submenus(&self, menu: MenuNodeId) -> &[MenuNodeId] {
        &self.nodes[menu.0].submenus
    }

    /// Whether the node currently has any children (entries or submenus).
    pub fn has_children(&self, menu: MenuNodeId) -> bool {
        let node = &self.nodes[menu.0];
        !node.entries.is_empty() || !node.submenus.is_empty()
    }
}

impl MenuHost for MenuModel {
    type Menu = MenuNodeId;

    fn add_child(&mut self, menu: &MenuNodeId, entry: &EntrySpec) {
        self.nodes[menu.0].entries.push(entry.clone());
    }

    fn remove_all_children(&mut self, menu: &MenuNodeId) {
        self.nodes[menu.0].entries.clear();
        let submenus = std::mem::take(&mut self.nodes[menu.0].submenus);
        for sub in submenus {
            self.nodes[sub.0].parent = None;
            self.remove_all_children(&sub);
        }
    }

    fn parent_of(&self, menu: &MenuNodeId) -> Option<MenuNodeId> {
        self.nodes[menu.0].parent
    }

    fn remove_child(&mut self, parent: &MenuNodeId, child: &MenuNodeId) {
        let submenus = &mut self.nodes[parent.0].submenus;
        if let Some(pos) = submenus.iter().position(|id| id == child) {
            submenus.remove(pos);
            self.nodes[child.0].parent = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submenu_records_parent() {
        let mut model = MenuModel::new();
        let root = model.add_menu("Debug");
        let sub = model.add_submenu(root, "Logging");

        assert_eq!(model.parent_of(&sub), Some(root));
        assert_eq!(model.submenus(root), [sub]);
    }

    #[test]
    fn remove_all_children_is_recursive() {
        let mut model = MenuModel::new();
        let root = model.add_menu("Debug");
        let sub = model.add_submenu(root, "Logging");
        model.add_child(&sub, &EntrySpec::for_channel("Network", false));
        model.add_child(&root, &EntrySpec::for_channel("UI", true));

        model.remove_all_children(&root);

        assert!(!model.has_children(root));
        assert!(!model.has_children(sub));
        assert_eq!(model.parent_of(&sub), None);
    }

    #[test]
    fn remove_child_ignores_non_children() {
        let mut model = MenuModel::new();
        let root = model.add_menu("Debug");
        let other = model.add_menu("File");
        let sub = model.add_submenu(root, "Logging");

        model.remove_child(&other, &sub);
        assert_eq!(model.parent_of(&sub), Some(root));
    }
}
