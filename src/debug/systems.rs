//! Debug domain: hotkeys, gizmos and overlay updates.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, movement_snapshot, spawn_debug_info_overlay};
use crate::level::LevelEntity;
use crate::movement::{MovementState, Player};
use crate::pipes::traversal::compute_launch;
use crate::pipes::{Pipe, PipeTraveler, endpoint_pose};

/// Seconds of travel drawn for the velocity arrow
const VELOCITY_ARROW_SECONDS: f32 = 0.2;

/// F2 info overlay, F3 gizmos, F4 snapshot to the log
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    players: Query<(&Transform, &LinearVelocity, &MovementState, &PipeTraveler), With<Player>>,
    level_entities: Query<(), With<LevelEntity>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_info = !debug_state.show_info;
        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }

    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        let msg = if debug_state.show_gizmos {
            "Gizmos ON"
        } else {
            "Gizmos OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        info!("[DEBUG] {} level entities", level_entities.iter().count());
        for (transform, velocity, state, traveler) in &players {
            info!(
                "[DEBUG] {} transit {:?}",
                movement_snapshot(transform.translation.truncate(), velocity.0, state),
                traveler.transit
            );
        }
        debug_state.set_message("Snapshot logged", 2.0);
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

pub(crate) fn draw_debug_gizmos(
    mut gizmos: Gizmos,
    pipes: Query<(&Pipe, &GlobalTransform)>,
    players: Query<(&Transform, &LinearVelocity), With<Player>>,
) {
    for (pipe, transform) in &pipes {
        let (position, angle) = endpoint_pose(transform);
        let launch = compute_launch(position, angle, &pipe.tuning);
        let color = if pipe.ignore.is_empty() {
            Color::srgb(0.3, 0.9, 0.4)
        } else {
            Color::srgb(0.9, 0.4, 0.3)
        };

        gizmos.arrow_2d(position, launch.position, color);
        gizmos.circle_2d(Isometry2d::from_translation(launch.position), 4.0, color);
    }

    for (transform, velocity) in &players {
        let start = transform.translation.truncate();
        gizmos.arrow_2d(
            start,
            start + velocity.0 * VELOCITY_ARROW_SECONDS,
            Color::srgb(0.9, 0.9, 0.3),
        );
    }
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    players: Query<(&Transform, &LinearVelocity, &MovementState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut lines: Vec<String> = players
        .iter()
        .map(|(transform, velocity, state)| {
            movement_snapshot(transform.translation.truncate(), velocity.0, state)
        })
        .collect();
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }
    **text = lines.join("\n");
}
