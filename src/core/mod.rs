//! Core domain: camera, fixed timestep and the tick ordering shared by all domains.

mod sets;
mod systems;

pub use sets::TickSet;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Physics tick rate. The movement tuning is expressed per second, so this
/// only changes granularity, not feel.
pub const TICK_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Settle,
                    TickSet::Contacts,
                    TickSet::Movement,
                    TickSet::Traversal,
                    TickSet::Cleanup,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera);
    }
}
