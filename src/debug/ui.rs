//! Debug domain: overlay spawning and text formatting.

use bevy::prelude::*;

use crate::movement::{MovementState, controller::to_screen};

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// One-line summary of a body's movement state. `world_velocity` is +Y up
/// and is reported in the same screen space the state uses.
pub fn movement_snapshot(position: Vec2, world_velocity: Vec2, state: &MovementState) -> String {
    let velocity = to_screen(world_velocity);
    format!(
        "pos ({:.0}, {:.0}) vel ({:.0}, {:.0}) mode {:?} grounded {} wall {} lock {:.2} launched {}",
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        state.mode,
        state.grounded,
        if state.on_wall {
            format!("({:.0}, {:.0})", state.wall_normal.x, state.wall_normal.y)
        } else {
            "-".to_string()
        },
        state.input_lock,
        state.launched,
    )
}
