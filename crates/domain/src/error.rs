//! Common error types used across the workspace.

use thiserror::Error;

/// Top-level error type shared by the application and adapter layers.
///
/// Each layer defines its own typed errors and converts via `#[from]`;
/// adapters box theirs into the [`Storage`](Self::Storage) variant.
#[derive(Debug, Error)]
pub enum FlowGateError {
    /// Malformed inbound data, e.g. an unknown valve command.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store was unreachable or a write failed.
    ///
    /// Never retried internally; the device re-sends on its next cycle.
    #[error("storage unavailable")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections of inbound data before it reaches the domain model.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A valve command other than `open` or `close`.
    ///
    /// The display text is the exact detail string polling devices and
    /// the operator dashboard expect on rejection.
    #[error("Invalid state")]
    UnknownValveCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_state_for_unknown_valve_command() {
        let err = ValidationError::UnknownValveCommand("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid state");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: FlowGateError =
            ValidationError::UnknownValveCommand("half-open".to_string()).into();
        assert!(matches!(err, FlowGateError::Validation(_)));
    }
}
