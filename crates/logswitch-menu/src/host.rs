//! The host menu framework contract.

use crate::entry::EntrySpec;

/// Primitive structural operations a host menu framework must expose.
///
/// Structural operations must not fail under normal conditions; removing
/// from an empty or absent structure is a defined no-op. Handles must remain
/// valid nodes of the host's menu tree for the duration of a call; that is
/// a caller precondition, not something implementations diagnose.
///
/// Selection events are the host's concern: whatever its event model, it
/// must deliver the selected entry's id string (see [`crate::entry`]) back
/// to the synchronizer.
pub trait MenuHost {
    /// Handle to a menu node that can hold entries and submenus.
    type Menu: Clone;

    /// Append an entry as the last child of `menu`.
    fn add_child(&mut self, menu: &Self::Menu, entry: &EntrySpec);

    /// Remove every child of `menu`, recursively. No-op when already empty.
    fn remove_all_children(&mut self, menu: &Self::Menu);

    /// The menu's parent node, if it is currently attached to one.
    fn parent_of(&self, menu: &Self::Menu) -> Option<Self::Menu>;

    /// Remove `child` from `parent`. No-op if `child` is not a child of
    /// `parent`.
    fn remove_child(&mut self, parent: &Self::Menu, child: &Self::Menu);
}
