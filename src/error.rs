//! Crate-level error taxonomy.
//!
//! Actions fail with `anyhow::Error` so that a leaf's concrete error type
//! crosses any number of decorators untouched and still downcasts at the
//! driver. This enum covers only the failures the framework itself can
//! originate.

use thiserror::Error;

/// Errors produced by the framework, as opposed to errors produced by the
/// actions it composes.
#[derive(Debug, Error)]
pub enum ConvergeError {
    /// The tick's cancellation token fired.
    #[error("operation was cancelled: {operation}")]
    Cancelled { operation: String },

    /// A parallel worker task went away without completing or panicking.
    /// Only reachable when the runtime is torn down mid-run.
    #[error("worker task aborted before completion")]
    WorkerAborted {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ConvergeError {
    /// Create a cancellation error.
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Cancelled { .. } => "cancelled",
            Self::WorkerAborted { .. } => "worker",
        }
    }
}

/// Result type alias for framework operations.
pub type Result<T> = std::result::Result<T, ConvergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_names_the_operation() {
        let err = ConvergeError::cancelled("tick");
        assert_eq!(err.to_string(), "operation was cancelled: tick");
        assert_eq!(err.category(), "cancelled");
    }

    #[test]
    fn errors_cross_into_anyhow_and_back() {
        let err: anyhow::Error = ConvergeError::cancelled("tick").into();
        assert!(err.downcast_ref::<ConvergeError>().is_some());
    }
}
