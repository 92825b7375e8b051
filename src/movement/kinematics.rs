//! Movement domain: the per-tick kinematic integrator.
//!
//! Everything here is screen space (+Y down) and free of ECS types so the
//! same math drives the systems and the unit tests.

use crate::movement::MovementTuning;
use crate::movement::controller::TickInput;

/// Zero-aware sign: returns 0.0 for zero (and NaN) instead of `f32::signum`'s ±1.
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let max_delta = max_delta.max(0.0);
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Map a raw axis value to a walk direction.
///
/// The result is the axis sign, halved (by default) inside the slow-walk band,
/// which gives two discrete speeds rather than analog scaling.
pub fn walk_direction(axis: f32, tuning: &MovementTuning) -> f32 {
    if axis == 0.0 || !axis.is_finite() {
        return 0.0;
    }

    let direction = sign(axis);
    if axis.abs() < tuning.slow_walk_threshold {
        direction * tuning.slow_walk_multiplier
    } else {
        direction
    }
}

/// Momentum carried from the last external launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchCarry {
    pub sign: f32,
    pub speed_x: f32,
}

pub fn integrate_vertical(
    vy: f32,
    grounded: bool,
    input: &TickInput,
    tuning: &MovementTuning,
    dt: f32,
) -> f32 {
    let mut vy = vy;

    if !grounded {
        vy += tuning.gravity.y * dt;
        // Falling pulls harder than rising
        if vy > 0.0 {
            vy += tuning.gravity.y * dt * tuning.additional_fall_gravity_factor;
        }
    }

    if input.jump_pressed && grounded {
        vy = tuning.jump_velocity;
    } else if input.jump_released && !grounded && vy < 0.0 {
        // Short hop
        vy *= tuning.jump_stop_multiplier;
    }

    vy
}

pub fn integrate_horizontal(
    vx: f32,
    direction: f32,
    grounded: bool,
    carry: Option<LaunchCarry>,
    tuning: &MovementTuning,
    dt: f32,
) -> f32 {
    match carry {
        Some(carry) if !grounded => {
            let effective_sign = if direction != 0.0 {
                sign(direction)
            } else {
                carry.sign
            };
            let target = carry.speed_x.abs() * effective_sign + tuning.speed * direction;
            move_toward(vx, target, tuning.air_acceleration * dt)
        }
        _ if grounded => {
            if direction != 0.0 {
                direction * tuning.speed
            } else {
                move_toward(vx, 0.0, tuning.floor_friction * dt)
            }
        }
        _ => {
            if direction != 0.0 {
                move_toward(vx, direction * tuning.speed, tuning.air_acceleration * dt)
            } else {
                move_toward(
                    vx,
                    0.0,
                    tuning.air_acceleration * tuning.mid_air_stop_multiplier * dt,
                )
            }
        }
    }
}
