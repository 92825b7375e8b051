//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::state_machine::MoveMode;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Pipe trigger regions - should not block movement
    Pipe,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Per-body kinematic state.
///
/// Vectors here are in screen space (+Y points down), matching the
/// convention of the tick integrator. `wall_normal` is only meaningful
/// while `on_wall` is set.
#[derive(Component, Debug, Clone, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub on_wall: bool,
    pub wall_normal: Vec2,
    pub mode: MoveMode,
    /// Seconds left before control input is honored again.
    pub input_lock: f32,
    /// An external launch is still being carried (pipe fling).
    pub launched: bool,
    pub launch_sign: f32,
    pub launch_velocity: Vec2,
    /// Walk direction produced on the last tick (-1, -0.5, 0, 0.5, 1 with defaults).
    pub direction_x: f32,
    pub facing: Facing,
}

impl MovementState {
    pub fn controls_locked(&self) -> bool {
        self.input_lock > 0.0
    }

    /// Record an externally injected velocity and lock control for `lock` seconds.
    pub fn begin_launch(&mut self, velocity: Vec2, lock: f32) {
        self.input_lock = if lock.is_finite() { lock.max(0.0) } else { 0.0 };
        self.launched = true;
        self.launch_sign = crate::movement::kinematics::sign(velocity.x);
        self.launch_velocity = velocity;
    }

    /// Forget the carried launch momentum, leaving any input lock untouched.
    pub fn clear_launch_memory(&mut self) {
        self.launched = false;
        self.launch_sign = 0.0;
        self.launch_velocity = Vec2::ZERO;
    }

    /// Cancel the launch entirely, including the input lock.
    pub fn cancel_launch(&mut self) {
        self.clear_launch_memory();
        self.input_lock = 0.0;
    }

    pub fn view(&self) -> MovementView {
        MovementView {
            mode: self.mode,
            direction_x: self.direction_x,
            grounded: self.grounded,
            facing: self.facing,
        }
    }
}

/// Read-only slice of the movement state polled by the visual layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementView {
    pub mode: MoveMode,
    pub direction_x: f32,
    pub grounded: bool,
    /// Last non-zero walk direction; kept while idle.
    pub facing: Facing,
}

/// Capability flags gating the optional moves.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abilities {
    pub ball: bool,
    pub wall_slide: bool,
    pub wall_jump: bool,
}

impl Default for Abilities {
    fn default() -> Self {
        Self {
            ball: true,
            wall_slide: true,
            wall_jump: true,
        }
    }
}
