//! Pipes domain: paired endpoints that teleport and fling travelers.

mod components;
mod events;
mod systems;
pub mod traversal;

#[cfg(test)]
mod tests;

pub use components::{Pipe, PipeSpin, PipeTraveler, endpoint_pose};
pub use events::{PipeContactEvent, PipeExitEvent};
pub use traversal::PipeTuning;

use bevy::prelude::*;

use crate::core::TickSet;
use crate::pipes::systems::{
    apply_pipe_traversal, forward_pipe_contacts, prune_pipe_ignore_sets, spin_pipes,
    tick_pipe_ignore_sets,
};

pub struct PipesPlugin;

impl Plugin for PipesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PipeContactEvent>()
            .add_message::<PipeExitEvent>()
            .add_systems(FixedUpdate, tick_pipe_ignore_sets.in_set(TickSet::Settle))
            .add_systems(
                FixedUpdate,
                (
                    forward_pipe_contacts,
                    apply_pipe_traversal,
                    prune_pipe_ignore_sets,
                )
                    .chain()
                    .in_set(TickSet::Traversal),
            )
            .add_systems(FixedUpdate, spin_pipes.in_set(TickSet::Cleanup));
    }
}
