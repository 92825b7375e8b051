//! Movement domain: NORMAL / BALL / WALL-SLIDE mode transitions.

use bevy::prelude::*;

use crate::movement::controller::TickInput;
use crate::movement::kinematics::sign;
use crate::movement::{Abilities, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveMode {
    #[default]
    Normal,
    /// Compact "ball up" form; cannot wall slide.
    Ball,
    WallSlide,
}

/// Contact flags reported by the collision layer for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contacts {
    pub grounded: bool,
    pub on_wall: bool,
    pub wall_normal: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeTransition {
    pub next: MoveMode,
    /// Ball was released on the ground; the caller applies the bounce impulse.
    pub ball_bounce: bool,
    /// Jump pressed against a wall; the wall handler applies the impulse.
    pub wall_jump: bool,
}

impl ModeTransition {
    fn to(next: MoveMode) -> Self {
        Self {
            next,
            ball_bounce: false,
            wall_jump: false,
        }
    }
}

/// Per-mode velocity override, applied with the mode the tick started in.
/// Returns true when the ball bounce replaced a jump.
pub fn apply_mode_override(
    mode: MoveMode,
    velocity: &mut Vec2,
    grounded: bool,
    input: &TickInput,
    tuning: &MovementTuning,
) -> bool {
    if mode == MoveMode::Ball && input.jump_pressed && grounded {
        velocity.y = tuning.ball_bounce_velocity();
        return true;
    }
    false
}

/// Decide the mode for the next tick from this tick's integrated velocity.
pub fn evaluate_mode(
    current: MoveMode,
    velocity: Vec2,
    contacts: &Contacts,
    input: &TickInput,
    abilities: &Abilities,
) -> ModeTransition {
    if current == MoveMode::Ball {
        if input.ball_released || !input.ball_held {
            return ModeTransition {
                next: MoveMode::Normal,
                ball_bounce: contacts.grounded,
                wall_jump: false,
            };
        }
        return ModeTransition::to(MoveMode::Ball);
    }

    if abilities.ball && (input.ball_pressed || input.ball_held) {
        return ModeTransition::to(MoveMode::Ball);
    }

    if contacts.grounded || !contacts.on_wall {
        return ModeTransition::to(MoveMode::Normal);
    }

    if input.jump_pressed && abilities.wall_jump {
        return ModeTransition {
            next: MoveMode::Normal,
            ball_bounce: false,
            wall_jump: true,
        };
    }

    if !abilities.wall_slide {
        return ModeTransition::to(MoveMode::Normal);
    }

    let wall_sign = sign(contacts.wall_normal.x);
    let direction = if velocity.x != 0.0 {
        sign(velocity.x)
    } else {
        wall_sign
    };

    // Moving against the outward normal means pressing into the wall
    if direction != wall_sign {
        ModeTransition::to(MoveMode::WallSlide)
    } else {
        ModeTransition::to(MoveMode::Normal)
    }
}
