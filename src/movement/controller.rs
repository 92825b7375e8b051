//! Movement domain: one fixed tick of the character controller.
//!
//! Order within a tick: input lock, integration, mode override (with the mode
//! the tick started in), mode evaluation, wall handling. The evaluated mode
//! only drives overrides from the next tick on.

use bevy::prelude::*;

use crate::movement::kinematics::{
    LaunchCarry, integrate_horizontal, integrate_vertical, walk_direction,
};
use crate::movement::state_machine::{Contacts, MoveMode, apply_mode_override, evaluate_mode};
use crate::movement::wall::apply_wall_interaction;
use crate::movement::{Abilities, Facing, MovementState, MovementTuning};

/// Sampled input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    pub axis_x: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub ball_pressed: bool,
    pub ball_held: bool,
    pub ball_released: bool,
}

impl TickInput {
    /// Same input with every control removed. `hold_ball` pins the held
    /// state so the current form neither starts nor ends under a lock.
    pub fn without_controls(self, hold_ball: bool) -> Self {
        Self {
            axis_x: 0.0,
            jump_pressed: false,
            jump_released: false,
            ball_pressed: false,
            ball_held: hold_ball,
            ball_released: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    pub previous_mode: MoveMode,
    pub mode: MoveMode,
    pub controls_locked: bool,
    pub jumped: bool,
    pub ball_bounced: bool,
    pub wall_jumped: bool,
    pub wall_slid: bool,
    pub launch_ended: bool,
}

impl TickReport {
    pub fn mode_changed(&self) -> bool {
        self.previous_mode != self.mode
    }
}

/// World (+Y up) to screen (+Y down).
pub fn to_screen(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Screen (+Y down) to world (+Y up).
pub fn to_world(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

pub fn step(
    state: &mut MovementState,
    velocity: &mut Vec2,
    input: TickInput,
    abilities: &Abilities,
    tuning: &MovementTuning,
    dt: f32,
) -> TickReport {
    let mut report = TickReport {
        previous_mode: state.mode,
        ..default()
    };

    let input = if state.controls_locked() {
        report.controls_locked = true;
        input.without_controls(state.mode == MoveMode::Ball)
    } else {
        input
    };
    state.input_lock = (state.input_lock - dt).max(0.0);

    if state.grounded
        && state.launched
        && tuning.launch_memory_reset.allows_reset(state.input_lock)
    {
        state.clear_launch_memory();
        report.launch_ended = true;
    }

    let direction = walk_direction(input.axis_x, tuning);
    let carry = state.launched.then_some(LaunchCarry {
        sign: state.launch_sign,
        speed_x: state.launch_velocity.x,
    });

    velocity.y = integrate_vertical(velocity.y, state.grounded, &input, tuning, dt);
    velocity.x = integrate_horizontal(velocity.x, direction, state.grounded, carry, tuning, dt);
    report.jumped = input.jump_pressed && state.grounded;

    if apply_mode_override(state.mode, velocity, state.grounded, &input, tuning) {
        report.ball_bounced = true;
    }

    let contacts = Contacts {
        grounded: state.grounded,
        on_wall: state.on_wall,
        wall_normal: state.wall_normal,
    };
    let transition = evaluate_mode(state.mode, *velocity, &contacts, &input, abilities);
    if transition.ball_bounce {
        velocity.y = tuning.ball_bounce_velocity();
        report.ball_bounced = true;
    }
    state.mode = transition.next;

    let wall = apply_wall_interaction(state, velocity, transition.wall_jump, abilities, tuning);
    report.wall_jumped = wall.jumped;
    report.wall_slid = wall.slid;
    report.launch_ended |= wall.launch_cancelled;

    state.direction_x = direction;
    if direction > 0.0 {
        state.facing = Facing::Right;
    } else if direction < 0.0 {
        state.facing = Facing::Left;
    }

    report.mode = state.mode;
    report
}
