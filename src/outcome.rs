//! Scheduling intent returned to the control-loop driver.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the driver should do with the action tree after this tick.
///
/// Actions only state intent: converged, or run me again (optionally
/// after a delay). Interpreting the intent and deciding how aggressively
/// to honor it is the driver's contract, not this crate's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Request an immediate re-run on the next tick.
    pub requeue: bool,
    /// Request a re-run after this delay. When set, drivers honor the
    /// delay over the bare `requeue` flag.
    pub requeue_after: Option<Duration>,
}

impl Outcome {
    /// The tree converged; nothing left to do this tick.
    pub fn done() -> Self {
        Self::default()
    }

    /// Ask the driver for an immediate requeue.
    pub fn requeue() -> Self {
        Self {
            requeue: true,
            requeue_after: None,
        }
    }

    /// Ask the driver to requeue after `delay`.
    pub fn requeue_after(delay: Duration) -> Self {
        Self {
            requeue: false,
            requeue_after: Some(delay),
        }
    }

    /// Whether the driver should schedule another tick at all.
    pub fn needs_requeue(&self) -> bool {
        self.requeue || self.requeue_after.is_some()
    }
}
