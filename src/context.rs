//! Per-tick execution context passed through the action tree.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::error::ConvergeError;

/// Cancellation and deadline carrier shared by every action in the tree
/// for one control-loop tick.
///
/// Cloning is cheap, and clones observe the same cancellation token, so a
/// decorator can hand the context to a worker without splitting the tick
/// into separate cancellation domains.
///
/// Cancellation is cooperative: the context never interrupts an action,
/// it only answers when asked. An action that ignores the token simply
/// keeps running.
#[derive(Debug, Clone)]
pub struct TickContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl TickContext {
    /// Create a context with a fresh token and no deadline.
    pub fn new() -> Self {
        Self {
            cancellation: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Replace the cancellation token, e.g. with a child of the driver's
    /// shutdown token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Set an absolute deadline for this tick.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The tick's cancellation token.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Resolve once cancellation is requested.
    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await;
    }

    /// Bail out of `operation` if cancellation has been requested.
    pub fn check_cancelled(&self, operation: &str) -> crate::error::Result<()> {
        if self.is_cancelled() {
            Err(ConvergeError::cancelled(operation))
        } else {
            Ok(())
        }
    }

    /// The tick's absolute deadline, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline. `None` when no deadline was set,
    /// zero when it has already passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Whether the deadline has passed.
    pub fn deadline_expired(&self) -> bool {
        matches!(self.remaining(), Some(remaining) if remaining.is_zero())
    }
}

impl Default for TickContext {
    fn default() -> Self {
        Self::new()
    }
}
