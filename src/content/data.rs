//! Data definitions for the content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are converted
//! into the runtime resources once loaded. Every field has a default, so a
//! file only needs to list what it changes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::level::{BlockLayout, LevelLayout, PipeEndpointLayout, PipePairLayout};
use crate::movement::{LaunchMemoryReset, MovementTuning};
use crate::pipes::PipeTuning;

// ============================================================================
// Movement (movement.ron)
// ============================================================================

/// Screen-space movement tuning: +Y is down, so jumps are negative.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    pub speed: f32,
    pub jump_velocity: f32,
    pub gravity: (f32, f32),
    pub additional_fall_gravity_factor: f32,
    pub jump_stop_multiplier: f32,
    pub slow_walk_threshold: f32,
    pub slow_walk_multiplier: f32,
    pub floor_friction: f32,
    pub air_acceleration: f32,
    pub mid_air_stop_multiplier: f32,
    pub ball_bounce_multiplier: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_multiplier: (f32, f32),
    pub wall_jump_lock_time: f32,
    pub launch_memory_reset: LaunchMemoryReset,
}

impl Default for MovementDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            speed: tuning.speed,
            jump_velocity: tuning.jump_velocity,
            gravity: tuning.gravity.into(),
            additional_fall_gravity_factor: tuning.additional_fall_gravity_factor,
            jump_stop_multiplier: tuning.jump_stop_multiplier,
            slow_walk_threshold: tuning.slow_walk_threshold,
            slow_walk_multiplier: tuning.slow_walk_multiplier,
            floor_friction: tuning.floor_friction,
            air_acceleration: tuning.air_acceleration,
            mid_air_stop_multiplier: tuning.mid_air_stop_multiplier,
            ball_bounce_multiplier: tuning.ball_bounce_multiplier,
            wall_slide_speed: tuning.wall_slide_speed,
            wall_jump_multiplier: tuning.wall_jump_multiplier.into(),
            wall_jump_lock_time: tuning.wall_jump_lock_time,
            launch_memory_reset: tuning.launch_memory_reset,
        }
    }
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            speed: def.speed,
            jump_velocity: def.jump_velocity,
            gravity: Vec2::from(def.gravity),
            additional_fall_gravity_factor: def.additional_fall_gravity_factor,
            jump_stop_multiplier: def.jump_stop_multiplier,
            slow_walk_threshold: def.slow_walk_threshold,
            slow_walk_multiplier: def.slow_walk_multiplier,
            floor_friction: def.floor_friction,
            air_acceleration: def.air_acceleration,
            mid_air_stop_multiplier: def.mid_air_stop_multiplier,
            ball_bounce_multiplier: def.ball_bounce_multiplier,
            wall_slide_speed: def.wall_slide_speed,
            wall_jump_multiplier: Vec2::from(def.wall_jump_multiplier),
            wall_jump_lock_time: def.wall_jump_lock_time,
            launch_memory_reset: def.launch_memory_reset,
        }
    }
}

// ============================================================================
// Level (level.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BlockKind {
    Ground,
    Wall,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockDef {
    pub kind: BlockKind,
    pub center: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipeEndpointDef {
    pub position: (f32, f32),
    #[serde(default)]
    pub rotation_degrees: f32,
    #[serde(default)]
    pub spin_degrees_per_second: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PipeTuningDef {
    pub exit_velocity: f32,
    pub exit_spawn_distance: f32,
    pub launch_period: f32,
    pub lateral_strength: f32,
    pub settle_delay: f32,
}

impl Default for PipeTuningDef {
    fn default() -> Self {
        let tuning = PipeTuning::default();
        Self {
            exit_velocity: tuning.exit_velocity,
            exit_spawn_distance: tuning.exit_spawn_distance,
            launch_period: tuning.launch_period,
            lateral_strength: tuning.lateral_strength,
            settle_delay: tuning.settle_delay,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipePairDef {
    pub id: String,
    pub a: PipeEndpointDef,
    pub b: PipeEndpointDef,
    #[serde(default)]
    pub tuning: PipeTuningDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub player_spawn: (f32, f32),
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub pipes: Vec<PipePairDef>,
}

impl From<&PipeTuningDef> for PipeTuning {
    fn from(def: &PipeTuningDef) -> Self {
        Self {
            exit_velocity: def.exit_velocity,
            exit_spawn_distance: def.exit_spawn_distance,
            launch_period: def.launch_period,
            lateral_strength: def.lateral_strength,
            settle_delay: def.settle_delay,
        }
    }
}

impl From<&PipeEndpointDef> for PipeEndpointLayout {
    fn from(def: &PipeEndpointDef) -> Self {
        Self {
            position: Vec2::from(def.position),
            rotation: def.rotation_degrees.to_radians(),
            spin: def.spin_degrees_per_second.to_radians(),
        }
    }
}

impl From<&LevelDef> for LevelLayout {
    fn from(def: &LevelDef) -> Self {
        Self {
            player_spawn: Vec2::from(def.player_spawn),
            blocks: def
                .blocks
                .iter()
                .map(|block| BlockLayout {
                    kind: block.kind,
                    center: Vec2::from(block.center),
                    size: Vec2::from(block.size),
                })
                .collect(),
            pipes: def
                .pipes
                .iter()
                .map(|pair| PipePairLayout {
                    id: pair.id.clone(),
                    a: PipeEndpointLayout::from(&pair.a),
                    b: PipeEndpointLayout::from(&pair.b),
                    tuning: PipeTuning::from(&pair.tuning),
                })
                .collect(),
        }
    }
}
