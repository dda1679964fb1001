//! Run a wrapped action on its own worker task.
//!
//! From the outside, `run` stays an ordinary call: it completes only when
//! the wrapped action has finished, and yields that action's exact
//! result. On the inside, execution happens on an independently scheduled
//! worker, and a panic unwinding out of the worker is re-raised on the
//! caller's side instead of dying at the task boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::action::{Action, ActionRef, ActionResult};
use crate::context::TickContext;
use crate::decorator::Decorator;
use crate::error::ConvergeError;

/// Decorator kind tag reported by [`Decorator::name`] for parallel
/// wrappers. [`parallel`] treats any decorator advertising this tag as
/// already wrapped.
pub const PARALLEL: &str = "Parallel";

/// Wrap `action` so it runs on its own worker task.
///
/// Wrapping an already-parallel action is a no-op: the same handle comes
/// back, so no second worker layer is stacked and the description prefix
/// appears once.
pub fn parallel(action: ActionRef) -> ActionRef {
    if matches!(action.as_decorator(), Some(d) if d.name() == PARALLEL) {
        return action;
    }
    Arc::new(ParallelAction { inner: action })
}

struct ParallelAction {
    inner: ActionRef,
}

impl Decorator for ParallelAction {
    fn name(&self) -> &str {
        PARALLEL
    }

    fn inner(&self) -> ActionRef {
        Arc::clone(&self.inner)
    }

    fn set_inner(&mut self, inner: ActionRef) {
        self.inner = inner;
    }
}

#[async_trait]
impl Action for ParallelAction {
    fn description(&self) -> String {
        format!("Parallel({})", self.inner.description())
    }

    async fn run(&self, ctx: &TickContext) -> ActionResult {
        let inner = Arc::clone(&self.inner);
        let ctx = ctx.clone();

        trace!(action = %self.inner.description(), "spawning worker for wrapped action");

        // The task harness is the panic interceptor: a panic unwinding
        // out of the inner run is captured into the join handle rather
        // than escaping on the worker.
        let worker = tokio::spawn(async move { inner.run(&ctx).await });

        match worker.await {
            Ok(result) => result,
            Err(failure) => match failure.try_into_panic() {
                // Relocate the worker's panic to the caller, payload
                // untouched, so the fault surfaces in the same scope it
                // would have without the offload.
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(failure) => {
                    debug!(error = %failure, "worker task aborted before completion");
                    Err(ConvergeError::WorkerAborted { source: failure }.into())
                }
            },
        }
    }

    fn as_decorator(&self) -> Option<&dyn Decorator> {
        Some(self)
    }

    fn as_decorator_mut(&mut self) -> Option<&mut dyn Decorator> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{action_fn, Nop};
    use crate::outcome::Outcome;

    #[test]
    fn wrapping_is_idempotent() {
        let wrapped = parallel(Arc::new(Nop));
        let rewrapped = parallel(Arc::clone(&wrapped));
        assert!(Arc::ptr_eq(&wrapped, &rewrapped));
    }

    #[test]
    fn exposes_the_decorator_surface() {
        let wrapped = parallel(Arc::new(Nop));
        let decorator = wrapped.as_decorator().unwrap();
        assert_eq!(decorator.name(), PARALLEL);
        assert_eq!(decorator.inner().description(), "Nop");
    }

    #[test]
    fn inner_is_replaceable_while_exclusively_held() {
        let mut wrapped = parallel(Arc::new(Nop));
        assert_eq!(wrapped.description(), "Parallel(Nop)");

        let decorator = Arc::get_mut(&mut wrapped)
            .and_then(|action| action.as_decorator_mut())
            .unwrap();
        decorator.set_inner(action_fn("refresh", |_ctx| async { Ok(Outcome::done()) }));

        assert_eq!(wrapped.description(), "Parallel(refresh)");
    }
}
