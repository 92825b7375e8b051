//! Movement domain: fixed-tick locomotion systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{step, to_screen, to_world};
use crate::movement::{Abilities, MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn step_players(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (Entity, &mut MovementState, &Abilities, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let tick_input = input.tick_input();

    for (entity, mut state, abilities, mut velocity) in &mut query {
        let mut screen_velocity = to_screen(velocity.0);
        let report = step(
            &mut state,
            &mut screen_velocity,
            tick_input,
            abilities,
            &tuning,
            dt,
        );
        velocity.0 = to_world(screen_velocity);

        if report.mode_changed() {
            debug!(
                "{:?} mode {:?} -> {:?}",
                entity, report.previous_mode, report.mode
            );
        }
        if report.wall_jumped {
            debug!(
                "{:?} wall jump: normal={:?}, velocity={:?}",
                entity, state.wall_normal, screen_velocity
            );
        }
        if report.ball_bounced {
            debug!("{:?} ball bounce: vy={}", entity, screen_velocity.y);
        }
        if report.launch_ended {
            debug!("{:?} launch ended", entity);
        }
    }
}

/// Edges are consumed once per fixed tick.
pub(crate) fn clear_input_edges(mut input: ResMut<MovementInput>) {
    input.clear_edges();
}
