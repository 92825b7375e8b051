//! Clip selection from the movement view.
//!
//! There is no sprite sheet yet, so a clip is shown as a tint on the
//! placeholder body and the sprite is mirrored while moving left.

use bevy::prelude::*;

use crate::movement::{Facing, MoveMode, MovementState, MovementTuning, MovementView};

/// Animation clips for the player body.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    #[default]
    Idle,
    Run,
    RunSlow,
    Jump,
    BallUp,
    WallSlide,
}

impl AnimationClip {
    pub fn name(self) -> &'static str {
        match self {
            AnimationClip::Idle => "idle",
            AnimationClip::Run => "run",
            AnimationClip::RunSlow => "run_slow",
            AnimationClip::Jump => "jump",
            AnimationClip::BallUp => "ball_up",
            AnimationClip::WallSlide => "wall_slide",
        }
    }

    pub fn tint(self) -> Color {
        match self {
            AnimationClip::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationClip::Run => Color::srgb(0.95, 0.85, 0.6),
            AnimationClip::RunSlow => Color::srgb(0.9, 0.9, 0.7),
            AnimationClip::Jump => Color::srgb(0.7, 0.85, 1.0),
            AnimationClip::BallUp => Color::srgb(1.0, 0.55, 0.3),
            AnimationClip::WallSlide => Color::srgb(0.75, 0.6, 0.95),
        }
    }
}

/// Pick the clip for a movement view.
pub fn select_clip(view: &MovementView, tuning: &MovementTuning) -> AnimationClip {
    match view.mode {
        MoveMode::Ball => AnimationClip::BallUp,
        MoveMode::WallSlide => AnimationClip::WallSlide,
        MoveMode::Normal if !view.grounded => AnimationClip::Jump,
        MoveMode::Normal => {
            let speed = view.direction_x.abs();
            if speed == 0.0 {
                AnimationClip::Idle
            } else if (speed - tuning.slow_walk_multiplier).abs() < f32::EPSILON {
                AnimationClip::RunSlow
            } else {
                AnimationClip::Run
            }
        }
    }
}

/// Mirror while facing left, including when standing still.
pub fn flip_for(view: &MovementView) -> bool {
    view.facing == Facing::Left
}

pub(crate) fn update_player_clips(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut AnimationClip, &mut Sprite)>,
) {
    for (state, mut clip, mut sprite) in &mut query {
        let view = state.view();
        let next = select_clip(&view, &tuning);
        if *clip != next {
            debug!("[ANIM] {} -> {}", clip.name(), next.name());
            *clip = next;
            sprite.color = next.tint();
        }
        sprite.flip_x = flip_for(&view);
    }
}
