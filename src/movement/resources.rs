//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::controller::TickInput;

/// When a grounded body forgets the momentum of its last launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum LaunchMemoryReset {
    /// Touching the ground ends the launch on that tick.
    Immediate,
    /// The launch survives ground contact until the input lock has run out.
    #[default]
    AfterLock,
}

impl LaunchMemoryReset {
    pub fn allows_reset(self, input_lock: f32) -> bool {
        match self {
            LaunchMemoryReset::Immediate => true,
            LaunchMemoryReset::AfterLock => input_lock <= 0.0,
        }
    }
}

/// Screen-space tuning: negative Y is up, so `jump_velocity` is negative.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub speed: f32,
    pub jump_velocity: f32,
    pub gravity: Vec2,
    pub additional_fall_gravity_factor: f32,
    /// Multiplier applied to upward velocity when jump is released early.
    pub jump_stop_multiplier: f32,
    pub slow_walk_threshold: f32,
    pub slow_walk_multiplier: f32,
    /// Grounded deceleration in speed units per second.
    pub floor_friction: f32,
    pub air_acceleration: f32,
    pub mid_air_stop_multiplier: f32,
    pub ball_bounce_multiplier: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_multiplier: Vec2,
    pub wall_jump_lock_time: f32,
    pub launch_memory_reset: LaunchMemoryReset,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 350.0,
            jump_velocity: -500.0,
            gravity: Vec2::new(0.0, 980.0),
            additional_fall_gravity_factor: 0.5,
            jump_stop_multiplier: 0.5,
            slow_walk_threshold: 0.325,
            slow_walk_multiplier: 0.5,
            floor_friction: 2800.0,
            air_acceleration: 1400.0,
            mid_air_stop_multiplier: 0.5,
            ball_bounce_multiplier: 0.5,
            wall_slide_speed: 100.0,
            wall_jump_multiplier: Vec2::new(1.5, 0.9),
            wall_jump_lock_time: 0.15,
            launch_memory_reset: LaunchMemoryReset::AfterLock,
        }
    }
}

impl MovementTuning {
    pub fn ball_bounce_velocity(&self) -> f32 {
        self.jump_velocity * self.ball_bounce_multiplier
    }
}

/// Input latched between fixed ticks.
///
/// Edge flags stay set until the next fixed tick consumes them, so a press
/// that lands on a frame without a physics step is not lost.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub ball_just_pressed: bool,
    pub ball_held: bool,
    pub ball_just_released: bool,
}

impl MovementInput {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            axis_x: self.axis_x,
            jump_pressed: self.jump_just_pressed,
            jump_released: self.jump_just_released,
            ball_pressed: self.ball_just_pressed,
            ball_held: self.ball_held,
            ball_released: self.ball_just_released,
        }
    }

    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.jump_just_released = false;
        self.ball_just_pressed = false;
        self.ball_just_released = false;
    }
}
