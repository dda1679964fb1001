//! The decorator contract: actions that wrap exactly one other action.

use crate::action::{Action, ActionRef};

/// An [`Action`] that owns exactly one inner action and forwards to it
/// with added behavior.
///
/// The accessors exist for tree tooling that walks a composition to
/// render it, or rewrites it (collapsing redundant wrappers, swapping a
/// subtree). Replacing the inner action takes `&mut self`, so a
/// replacement can never race a `run` in flight on the same decorator.
pub trait Decorator: Action {
    /// Short tag identifying the decorator kind, independent of the
    /// dynamically composed [`description`](Action::description).
    fn name(&self) -> &str;

    /// The currently wrapped action.
    fn inner(&self) -> ActionRef;

    /// Replace the wrapped action.
    fn set_inner(&mut self, inner: ActionRef);
}
