//! Action composition for declarative control loops.
//!
//! A control loop repeatedly drives a system toward a desired state by
//! evaluating a tree of [`Action`]s once per tick. Leaves do the actual
//! work; [`Decorator`]s wrap exactly one inner action and add structure.
//! The one concrete decorator here is [`parallel`], which offloads its
//! inner action to an independent worker task while keeping the outer
//! `run` synchronous from its caller's point of view. That includes
//! re-raising a worker panic on the caller's side with the payload
//! untouched.
//!
//! ```
//! use converge::{action_fn, parallel, Action, Outcome, TickContext};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let leaf = action_fn("refresh-status", |_ctx| async {
//!     Ok(Outcome::requeue_after(std::time::Duration::from_secs(30)))
//! });
//!
//! let root = parallel(leaf);
//! assert_eq!(root.description(), "Parallel(refresh-status)");
//!
//! let outcome = root.run(&TickContext::new()).await?;
//! assert!(outcome.needs_requeue());
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod context;
pub mod decorator;
pub mod error;
pub mod outcome;
pub mod parallel;

// Re-exports for convenience
pub use action::{action_fn, Action, ActionRef, ActionResult, Nop};
pub use context::TickContext;
pub use decorator::Decorator;
pub use error::{ConvergeError, Result};
pub use outcome::Outcome;
pub use parallel::parallel;
