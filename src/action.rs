//! The action contract and leaf adapters.
//!
//! An action is the unit of control-loop work. Trees mix leaves and
//! decorators freely behind one interface, held through [`ActionRef`]
//! handles.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context::TickContext;
use crate::decorator::Decorator;
use crate::outcome::Outcome;

/// Result of running an action: a scheduling intent, or an error.
///
/// Errors travel as `anyhow::Error` so a leaf's concrete error type
/// crosses any number of decorators and still downcasts at the driver.
pub type ActionResult = anyhow::Result<Outcome>;

/// Shared handle to an action in a composition tree.
pub type ActionRef = Arc<dyn Action>;

/// A composable unit of control-loop work.
#[async_trait]
pub trait Action: Send + Sync {
    /// Human-readable identity of this action, composed recursively by
    /// wrappers (a parallel-wrapped `a` renders as `Parallel(<a>)`).
    fn description(&self) -> String;

    /// Execute one tick's worth of work.
    ///
    /// The context carries the tick's cancellation token and deadline;
    /// observing them is this action's responsibility.
    async fn run(&self, ctx: &TickContext) -> ActionResult;

    /// The decorator surface of this action, if it has one.
    ///
    /// Tree-walking tooling descends through wrappers with this instead
    /// of knowing concrete types. Leaf actions keep the default.
    fn as_decorator(&self) -> Option<&dyn Decorator> {
        None
    }

    /// Mutable counterpart of [`as_decorator`](Action::as_decorator),
    /// used when rewriting a tree in place.
    fn as_decorator_mut(&mut self) -> Option<&mut dyn Decorator> {
        None
    }
}

/// Leaf action that does nothing and reports done.
///
/// Useful as a placeholder while rewriting a tree, or as the inner of a
/// decorator whose subtree has been pruned.
pub struct Nop;

#[async_trait]
impl Action for Nop {
    fn description(&self) -> String {
        "Nop".to_string()
    }

    async fn run(&self, _ctx: &TickContext) -> ActionResult {
        Ok(Outcome::done())
    }
}

/// Wrap an async closure as a leaf action.
///
/// The closure receives its own clone of the tick context on every run.
pub fn action_fn<F, Fut>(description: impl Into<String>, f: F) -> ActionRef
where
    F: Fn(TickContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ActionResult> + Send + 'static,
{
    Arc::new(FnAction {
        description: description.into(),
        f,
    })
}

struct FnAction<F> {
    description: String,
    f: F,
}

#[async_trait]
impl<F, Fut> Action for FnAction<F>
where
    F: Fn(TickContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ActionResult> + Send + 'static,
{
    fn description(&self) -> String {
        self.description.clone()
    }

    async fn run(&self, ctx: &TickContext) -> ActionResult {
        (self.f)(ctx.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn nop_reports_done() {
        let ctx = TickContext::new();
        assert_eq!(Nop.description(), "Nop");

        let outcome = Nop.run(&ctx).await.unwrap();
        assert!(!outcome.needs_requeue());
    }

    #[tokio::test]
    async fn closure_leaf_runs_with_context() {
        let leaf = action_fn("check-token", |ctx| async move {
            ctx.check_cancelled("check-token")?;
            Ok(Outcome::requeue())
        });
        assert_eq!(leaf.description(), "check-token");

        let ctx = TickContext::new();
        let outcome = leaf.run(&ctx).await.unwrap();
        assert!(outcome.requeue);

        ctx.cancellation().cancel();
        let err = leaf.run(&ctx).await.unwrap_err();
        assert!(err
            .downcast_ref::<crate::error::ConvergeError>()
            .is_some());
    }

    #[tokio::test]
    async fn leaves_are_not_decorators() {
        let leaf = action_fn("leaf", |_ctx| async { Ok(Outcome::done()) });
        assert!(leaf.as_decorator().is_none());
    }
}
