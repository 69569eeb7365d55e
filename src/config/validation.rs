//! Validation for movement tuning magnitudes.

use super::data::MovementTuningDef;

/// A validation error for a single tuning field.
#[derive(Debug)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f32,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' must be positive, got {}",
            self.field, self.value
        )
    }
}

/// Validate that every magnitude is positive.
/// Returns a list of validation errors, empty if the tuning is valid.
pub fn validate_tuning(def: &MovementTuningDef) -> Vec<TuningError> {
    let mut errors = Vec::new();

    let magnitudes = [
        ("speed", def.speed),
        ("jump_velocity", def.jump_velocity),
        ("ground_check_radius", def.ground_check_radius),
    ];

    for (field, value) in magnitudes {
        if value <= 0.0 || value.is_nan() {
            errors.push(TuningError { field, value });
        }
    }

    errors
}
