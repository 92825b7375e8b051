//! Movement domain: ground and wall contact detection.
//!
//! These ray casts stand in for the resolver's contact flags: they run at
//! the start of each fixed tick against the positions avian produced on the
//! previous step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::to_screen;
use crate::movement::{GameLayer, MovementState, Player};

const PROBE_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not pipes, other players, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, collider, mut state) in &mut query {
        let was_grounded = state.grounded;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };
        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        // Two rays at the feet corners so ledges still count as ground
        let feet = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let inset = half_width * 0.8;
        let grounded = [-inset, inset].into_iter().any(|offset| {
            spatial_query
                .cast_ray(
                    feet + Vec2::new(offset, 0.0),
                    Dir2::NEG_Y,
                    PROBE_DISTANCE,
                    true,
                    &ground_filter,
                )
                .is_some()
        });

        state.grounded = grounded;

        if grounded != was_grounded {
            debug!("{:?} grounded={}", entity, grounded);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (entity, transform, collider, mut state) in &mut query {
        let was_on_wall = state.on_wall;

        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let origin = transform.translation.truncate();
        let reach = half_width + PROBE_DISTANCE;

        let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter);
        let right_hit = spatial_query.cast_ray(origin, Dir2::X, reach, true, &wall_filter);

        // Wedged between two walls: the nearer one wins
        let hit = match (left_hit, right_hit) {
            (Some(left), Some(right)) => Some(if left.distance <= right.distance {
                left
            } else {
                right
            }),
            (left, right) => left.or(right),
        };

        match hit {
            Some(hit) => {
                state.on_wall = true;
                state.wall_normal = to_screen(hit.normal).normalize_or_zero();
            }
            None => {
                state.on_wall = false;
                state.wall_normal = Vec2::ZERO;
            }
        }

        if state.on_wall != was_on_wall {
            debug!(
                "{:?} on_wall={} normal={:?}",
                entity, state.on_wall, state.wall_normal
            );
        }
    }
}
