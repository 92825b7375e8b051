//! Movement domain: kinematic controller, mode machine and wall handling.

mod components;
pub mod controller;
pub mod kinematics;
mod resources;
pub mod state_machine;
mod systems;
pub mod wall;


pub use components::{Abilities, Facing, GameLayer, Ground, MovementState, MovementView, Player, Wall};
pub use resources::{LaunchMemoryReset, MovementInput, MovementTuning};
pub use state_machine::MoveMode;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::movement::systems::{
    clear_input_edges, detect_ground, detect_walls, read_input, step_players,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (detect_ground, detect_walls)
                    .chain()
                    .in_set(TickSet::Contacts),
            )
            .add_systems(FixedUpdate, step_players.in_set(TickSet::Movement))
            .add_systems(FixedUpdate, clear_input_edges.in_set(TickSet::Cleanup));
    }
}
