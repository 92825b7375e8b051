//! Pipes domain: endpoint and traveler components.

use bevy::prelude::*;

use crate::pipes::traversal::{IgnoreSet, PipeTuning};

/// One end of a pipe pair. Entering it sends the traveler out of `target`.
#[derive(Component, Debug)]
pub struct Pipe {
    pub name: String,
    pub target: Option<Entity>,
    pub tuning: PipeTuning,
    pub ignore: IgnoreSet<Entity>,
}

impl Pipe {
    pub fn new(name: impl Into<String>, target: Option<Entity>, tuning: PipeTuning) -> Self {
        Self {
            name: name.into(),
            target,
            tuning,
            ignore: IgnoreSet::default(),
        }
    }
}

/// Marks entities pipes are allowed to move.
#[derive(Component, Debug, Default)]
pub struct PipeTraveler {
    /// Destination endpoint while in transit, `None` when idle.
    pub transit: Option<Entity>,
}

/// Constant spin for moving endpoints, in radians per second.
#[derive(Component, Debug, Clone, Copy)]
pub struct PipeSpin(pub f32);

/// World position and Z rotation (radians) of an endpoint.
pub fn endpoint_pose(transform: &GlobalTransform) -> (Vec2, f32) {
    let (_, rotation, translation) = transform.to_scale_rotation_translation();
    let (angle, _, _) = rotation.to_euler(EulerRot::ZYX);
    (translation.truncate(), angle)
}
