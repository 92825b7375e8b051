//! Movement domain: wall slide clamp and wall jump impulse.

use bevy::prelude::*;

use crate::movement::kinematics::sign;
use crate::movement::state_machine::MoveMode;
use crate::movement::{Abilities, MovementState, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallOutcome {
    pub launch_cancelled: bool,
    pub slid: bool,
    pub jumped: bool,
}

/// Impulse pushing away from a wall whose outward normal is `wall_normal`.
///
/// The normal points out of the wall toward the body, so a wall on the
/// right (`normal.x = -1`) sends the body left.
pub fn wall_jump_velocity(wall_normal: Vec2, tuning: &MovementTuning) -> Vec2 {
    Vec2::new(
        tuning.speed * tuning.wall_jump_multiplier.x * sign(wall_normal.x),
        tuning.jump_velocity * tuning.wall_jump_multiplier.y,
    )
}

pub fn apply_wall_interaction(
    state: &mut MovementState,
    velocity: &mut Vec2,
    wall_jump: bool,
    abilities: &Abilities,
    tuning: &MovementTuning,
) -> WallOutcome {
    let mut outcome = WallOutcome::default();
    if !state.on_wall || state.mode == MoveMode::Ball {
        return outcome;
    }

    if state.launched || state.controls_locked() {
        state.cancel_launch();
        outcome.launch_cancelled = true;
    }

    if wall_jump {
        *velocity = wall_jump_velocity(state.wall_normal, tuning);
        state.input_lock = tuning.wall_jump_lock_time.max(0.0);
        outcome.jumped = true;
    } else if state.mode == MoveMode::WallSlide && abilities.wall_slide && velocity.y >= 0.0 {
        velocity.y = tuning.wall_slide_speed;
        outcome.slid = true;
    }

    outcome
}
