//! Host interaction errors.

/// Errors reported by host collaborators.
///
/// None of these are fatal: the overlay controller logs them and carries on
/// with the next tick.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Host is not ready")]
    NotReady,

    #[error("Host {what} is unavailable")]
    Unavailable { what: &'static str },

    #[error("Host rejected {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },
}

impl HostError {
    /// Create a Rejected error.
    pub fn rejected(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            message: message.into(),
        }
    }
}
