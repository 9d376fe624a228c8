//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SproutError`] at port boundaries.

/// Base error for everything that crosses a port boundary.
#[derive(Debug, thiserror::Error)]
pub enum SproutError {
    /// A domain value failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The transport failed to deliver an outbound command.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A reading could not be persisted.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Validation failures for domain values.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The policy threshold is NaN or infinite.
    #[error("threshold must be a finite number")]
    NonFiniteThreshold,

    /// The hold duration is zero — the actuator would never turn on.
    #[error("hold duration must be non-zero")]
    ZeroHold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_error() {
        let err = SproutError::from(ValidationError::NonFiniteThreshold);
        assert_eq!(err.to_string(), "validation error");
    }

    #[test]
    fn should_expose_source_for_transport_error() {
        use std::error::Error as _;
        let io = std::io::Error::other("broker unreachable");
        let err = SproutError::Transport(Box::new(io));
        assert!(err.source().is_some());
    }
}
