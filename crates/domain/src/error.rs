//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CasaError`]
//! via `#[from]` or an explicit `From` impl.

/// A value rejected before it could reach the house state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A sensor reading was `NaN` or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum CasaError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The physical controller could not be reached or refused the command.
    #[error("controller error")]
    Controller(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_field_in_non_finite_message() {
        let err = ValidationError::NonFinite {
            field: "distance_cm",
        };
        assert_eq!(err.to_string(), "distance_cm must be a finite number");
    }

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: CasaError = ValidationError::NonFinite { field: "humidity" }.into();
        assert!(matches!(
            err,
            CasaError::Validation(ValidationError::NonFinite { field: "humidity" })
        ));
    }
}
