//! Level domain: static geometry, pipe pairs and the player spawn.

mod layout;
mod spawn;


pub use layout::{BlockLayout, LevelLayout, PipeEndpointLayout, PipePairLayout};
pub use spawn::LevelEntity;

use bevy::prelude::*;

use crate::level::spawn::{spawn_level, spawn_player};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLayout>()
            .add_systems(Startup, (spawn_level, spawn_player).chain());
    }
}
