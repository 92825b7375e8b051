//! Sprites module: visual state for the player body.

pub mod animation;


use bevy::prelude::*;

pub use animation::{AnimationClip, select_clip};

use crate::sprites::animation::update_player_clips;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_player_clips);
    }
}
