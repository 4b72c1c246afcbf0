//! Error types
//!
//! Validation failures shared by the calculation engine and the unit converter.

use thiserror::Error;

use crate::conversion::UnitCategory;

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unknown {category} unit: '{unit}'")]
    UnknownUnit { unit: String, category: UnitCategory },
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn unknown_unit(unit: &str, category: UnitCategory) -> Self {
        CalcError::UnknownUnit {
            unit: unit.to_string(),
            category,
        }
    }
}

/// Result type for engine and converter operations
pub type CalcResult<T> = Result<T, CalcError>;
