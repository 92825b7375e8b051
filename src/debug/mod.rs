//! Debug overlay for tuning movement and pipes.
//!
//! - F2: movement info overlay
//! - F3: gizmos for pipe exits and player velocity
//! - F4: log a movement snapshot

mod state;
mod systems;
mod ui;


use bevy::prelude::*;

pub use state::DebugState;

use crate::debug::systems::{
    draw_debug_gizmos, handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, update_status_message).chain(),
            )
            .add_systems(
                Update,
                draw_debug_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
            )
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
