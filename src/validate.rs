//! validate.rs — form-level range checks for numeric inputs.
//!
//! This is a shell concern, deliberately outside the scorer: the scorer is
//! total and accepts anything, while the API surface rejects values outside
//! the bounds the form enforces. All failing fields are reported, not just
//! the first.

use serde::Serialize;

use crate::assessment::RiskInput;

pub const AGE_RANGE: (f32, f32) = (1.0, 120.0);
pub const GLUCOSE_RANGE: (f32, f32) = (50.0, 500.0);
pub const BMI_RANGE: (f32, f32) = (10.0, 60.0);

/// One failing field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Check the numeric fields against the form bounds.
pub fn validate(input: &RiskInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&input.age) {
        errors.push(FieldError {
            field: "age",
            message: "Please enter a valid age (1-120)",
        });
    }
    if !(GLUCOSE_RANGE.0..=GLUCOSE_RANGE.1).contains(&input.avg_glucose_level) {
        errors.push(FieldError {
            field: "avg_glucose_level",
            message: "Please enter a valid glucose level (50-500 mg/dL)",
        });
    }
    if !(BMI_RANGE.0..=BMI_RANGE.1).contains(&input.bmi) {
        errors.push(FieldError {
            field: "bmi",
            message: "Please enter a valid BMI (10-60)",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
