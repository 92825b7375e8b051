//! Content domain: data-driven movement tuning and level layout.

pub mod data;
pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

use std::path::Path;

use bevy::prelude::*;

pub use data::*;
pub use loader::{ContentLoadError, GameContent, load_all_content};
pub use validation::{ValidationError, validate_level, validate_movement};

use crate::level::LevelLayout;
use crate::movement::MovementTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load movement and level data, falling back to built-in defaults when the
/// files are missing or malformed. Validation problems are reported but the
/// values are still used.
fn load_content(mut commands: Commands) {
    match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(content) => {
            let issues: Vec<ValidationError> = validate_movement(&content.movement)
                .into_iter()
                .chain(validate_level(&content.level))
                .collect();
            for issue in &issues {
                warn!("Content validation: {}", issue);
            }

            let layout = LevelLayout::from(&content.level);
            info!(
                "Loaded content: {} blocks, {} pipe pairs, {} warnings",
                layout.blocks.len(),
                layout.pipes.len(),
                issues.len()
            );
            commands.insert_resource(MovementTuning::from(&content.movement));
            commands.insert_resource(layout);
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Using built-in movement tuning and test level");
            commands.insert_resource(MovementTuning::default());
            commands.insert_resource(LevelLayout::default());
        }
    }
}
