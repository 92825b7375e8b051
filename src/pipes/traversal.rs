//! Pipes domain: teleport math and the per-endpoint re-entrancy guard.
//!
//! Pure over `Vec2` and a generic entity key so the rules can be exercised
//! without a `World`. Positions and velocities are world space (+Y up).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use bevy::prelude::*;

/// Countdowns this close to zero count as elapsed, absorbing the drift of
/// summing fixed-step deltas.
const SETTLE_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeTuning {
    pub exit_velocity: f32,
    /// Distance from the destination endpoint along its facing where the
    /// traveler reappears.
    pub exit_spawn_distance: f32,
    /// Seconds of input lock after a launch.
    pub launch_period: f32,
    /// Extra speed along the facing's perpendicular axis.
    pub lateral_strength: f32,
    /// Seconds the traveler stays in the destination's ignore set.
    pub settle_delay: f32,
}

impl Default for PipeTuning {
    fn default() -> Self {
        Self {
            exit_velocity: 500.0,
            exit_spawn_distance: 25.0,
            launch_period: 0.1,
            lateral_strength: 0.0,
            settle_delay: 0.25,
        }
    }
}

/// Unit direction an endpoint points at: its local up axis.
/// Degenerate rotations produce a zero vector.
pub fn facing(rotation: f32) -> Vec2 {
    if !rotation.is_finite() {
        return Vec2::ZERO;
    }
    Vec2::new(-rotation.sin(), rotation.cos()).normalize_or_zero()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Exit position and velocity for an endpoint at `position` / `rotation`.
///
/// Always computed from the endpoint's current transform so moving or
/// spinning pipes carry their exit with them.
pub fn compute_launch(position: Vec2, rotation: f32, tuning: &PipeTuning) -> Launch {
    let facing = facing(rotation);

    let exit_position = position + facing * tuning.exit_spawn_distance;
    let velocity = facing * tuning.exit_velocity + facing.perp() * tuning.lateral_strength;

    Launch {
        position: if exit_position.is_finite() {
            exit_position
        } else {
            position
        },
        velocity: if velocity.is_finite() {
            velocity
        } else {
            Vec2::ZERO
        },
    }
}

/// Travelers currently exempt from triggering an endpoint, each with the
/// seconds left before it is re-armed.
#[derive(Debug, Clone)]
pub struct IgnoreSet<K> {
    remaining: HashMap<K, f32>,
}

impl<K> Default for IgnoreSet<K> {
    fn default() -> Self {
        Self {
            remaining: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> IgnoreSet<K> {
    /// Add `key` for `settle` seconds, restarting the countdown if present.
    pub fn insert(&mut self, key: K, settle: f32) {
        let settle = if settle.is_finite() {
            settle.max(0.0)
        } else {
            0.0
        };
        self.remaining.insert(key, settle);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.remaining.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.remaining.remove(key).is_some()
    }

    pub fn remaining(&self, key: &K) -> Option<f32> {
        self.remaining.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Count every entry down by `dt` and return the keys that were released.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let mut released = Vec::new();
        for (key, remaining) in self.remaining.iter_mut() {
            *remaining -= dt;
            if *remaining <= SETTLE_EPSILON {
                released.push(*key);
            }
        }
        for key in &released {
            self.remaining.remove(key);
        }
        released
    }
}

/// Travelers already teleported during the current tick.
#[derive(Debug)]
pub struct TransitGuard<K> {
    moved: HashSet<K>,
}

impl<K> Default for TransitGuard<K> {
    fn default() -> Self {
        Self {
            moved: HashSet::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> TransitGuard<K> {
    pub fn contains(&self, key: &K) -> bool {
        self.moved.contains(key)
    }

    fn mark(&mut self, key: K) {
        self.moved.insert(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalSkip {
    /// Still settling from an earlier arrival at this endpoint.
    Ignored,
    /// Already teleported once this tick.
    AlreadyMoved,
    /// The endpoint has no target set.
    Unpaired,
}

/// Check whether `traveler` entering an endpoint should be teleported,
/// returning the destination endpoint when it should.
pub fn check_entry<K: Copy + Eq + Hash>(
    traveler: K,
    source_ignore: &IgnoreSet<K>,
    source_target: Option<K>,
    guard: &TransitGuard<K>,
) -> Result<K, TraversalSkip> {
    if guard.contains(&traveler) {
        return Err(TraversalSkip::AlreadyMoved);
    }
    if source_ignore.contains(&traveler) {
        return Err(TraversalSkip::Ignored);
    }
    source_target.ok_or(TraversalSkip::Unpaired)
}

/// Register the arrival of `traveler` at the destination and compute its launch.
///
/// `tuning` belongs to the endpoint that was entered; the destination only
/// contributes its transform and ignore set.
pub fn arrive<K: Copy + Eq + Hash>(
    traveler: K,
    tuning: &PipeTuning,
    destination_ignore: &mut IgnoreSet<K>,
    destination_position: Vec2,
    destination_rotation: f32,
    guard: &mut TransitGuard<K>,
) -> Launch {
    destination_ignore.insert(traveler, tuning.settle_delay);
    guard.mark(traveler);
    compute_launch(destination_position, destination_rotation, tuning)
}
