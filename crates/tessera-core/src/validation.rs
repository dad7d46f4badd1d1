//! Validation utilities.

use crate::TesseraError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `TesseraError` on failure.
    fn validate_request(&self) -> Result<(), TesseraError> {
        self.validate().map_err(validation_errors_to_tessera_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `TesseraError`.
#[must_use]
pub fn validation_errors_to_tessera_error(errors: ValidationErrors) -> TesseraError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), std::string::ToString::to_string);
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    TesseraError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn test_valid_request_passes() {
        let probe = Probe {
            name: "abc".to_string(),
        };
        assert!(probe.validate_request().is_ok());
    }

    #[test]
    fn test_invalid_request_maps_to_validation_error() {
        let probe = Probe {
            name: "x".to_string(),
        };
        let err = probe.validate_request().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("too short"));
    }
}
