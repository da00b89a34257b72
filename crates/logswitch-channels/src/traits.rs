//! The registry contract consumed by UI surfaces.

use std::cell::RefCell;
use std::rc::Rc;

use crate::channel::Channel;
use crate::error::Result;

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The channel existed and its state was flipped to `enabled`.
    Toggled { enabled: bool },
    /// No channel with the requested name is registered.
    ///
    /// Not an error: a UI surface may race a registry mutation and select an
    /// entry whose channel has since been removed.
    UnknownChannel,
}

/// Contract a channel registry must satisfy to back a UI surface.
///
/// The registry owns channel state; consumers only read snapshots and issue
/// toggle requests. Snapshot ordering must be deterministic for a given
/// registry state, since it drives display order.
pub trait ChannelRegistry {
    /// Produce an ordered snapshot of all channels.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] if the backing store cannot be
    /// read.
    ///
    /// [`RegistryError::Unavailable`]: crate::error::RegistryError::Unavailable
    fn current_snapshot(&self) -> Result<Vec<Channel>>;

    /// Flip the enabled state of the named channel.
    fn toggle(&mut self, name: &str) -> ToggleOutcome;
}

/// Shared single-threaded ownership: a host and a UI surface can hold the
/// same registry through `Rc<RefCell<_>>`.
impl<R: ChannelRegistry> ChannelRegistry for Rc<RefCell<R>> {
    fn current_snapshot(&self) -> Result<Vec<Channel>> {
        self.borrow().current_snapshot()
    }

    fn toggle(&mut self, name: &str) -> ToggleOutcome {
        self.borrow_mut().toggle(name)
    }
}
