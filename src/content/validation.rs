//! Validation for loaded content values.

use std::collections::HashSet;

use super::data::{LevelDef, MovementDef, PipeTuningDef};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a numeric field
macro_rules! check_value {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr, $ok:expr, $message:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!("{} (got {})", $message, value),
            });
        }
    };
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

fn positive(value: f32) -> bool {
    value > 0.0
}

fn unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

fn any_finite(_: f32) -> bool {
    true
}

pub fn validate_movement(movement: &MovementDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "movement";

    check_value!(errors, "Movement", id, "speed", movement.speed, positive, "must be positive");
    check_value!(
        errors,
        "Movement",
        id,
        "jump_velocity",
        movement.jump_velocity,
        |v: f32| v < 0.0,
        "must be negative (screen space, +Y down)"
    );
    check_value!(errors, "Movement", id, "gravity", movement.gravity.0, any_finite, "must be finite");
    check_value!(errors, "Movement", id, "gravity", movement.gravity.1, non_negative, "must pull down");
    check_value!(
        errors,
        "Movement",
        id,
        "slow_walk_threshold",
        movement.slow_walk_threshold,
        unit_interval,
        "must lie in [0, 1]"
    );
    check_value!(
        errors,
        "Movement",
        id,
        "slow_walk_multiplier",
        movement.slow_walk_multiplier,
        unit_interval,
        "must lie in [0, 1]"
    );
    check_value!(
        errors,
        "Movement",
        id,
        "floor_friction",
        movement.floor_friction,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "Movement",
        id,
        "air_acceleration",
        movement.air_acceleration,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "Movement",
        id,
        "wall_slide_speed",
        movement.wall_slide_speed,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "Movement",
        id,
        "wall_jump_lock_time",
        movement.wall_jump_lock_time,
        non_negative,
        "must be non-negative"
    );

    errors
}

fn validate_pipe_tuning(errors: &mut Vec<ValidationError>, id: &str, tuning: &PipeTuningDef) {
    check_value!(
        errors,
        "Pipe",
        id,
        "exit_velocity",
        tuning.exit_velocity,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "Pipe",
        id,
        "exit_spawn_distance",
        tuning.exit_spawn_distance,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "Pipe",
        id,
        "launch_period",
        tuning.launch_period,
        non_negative,
        "must be non-negative"
    );
    check_value!(
        errors,
        "Pipe",
        id,
        "lateral_strength",
        tuning.lateral_strength,
        any_finite,
        "must be finite"
    );
    check_value!(
        errors,
        "Pipe",
        id,
        "settle_delay",
        tuning.settle_delay,
        non_negative,
        "must be non-negative"
    );
}

/// Validate level layout values and pipe ids.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, block) in level.blocks.iter().enumerate() {
        let id = format!("#{index}");
        check_value!(errors, "Block", id, "size", block.size.0, positive, "must be positive");
        check_value!(errors, "Block", id, "size", block.size.1, positive, "must be positive");
    }

    let mut seen = HashSet::new();
    for pair in &level.pipes {
        if !seen.insert(pair.id.as_str()) {
            errors.push(ValidationError {
                source_type: "Pipe",
                source_id: pair.id.clone(),
                field: "id",
                message: "duplicate pipe id".to_string(),
            });
        }
        if pair.a.position == pair.b.position {
            errors.push(ValidationError {
                source_type: "Pipe",
                source_id: pair.id.clone(),
                field: "b.position",
                message: "both endpoints share a position".to_string(),
            });
        }
        validate_pipe_tuning(&mut errors, &pair.id, &pair.tuning);
    }

    errors
}
