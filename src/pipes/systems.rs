//! Pipes domain: contact forwarding, teleports and settle bookkeeping.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::MovementState;
use crate::movement::controller::to_screen;
use crate::pipes::components::{Pipe, PipeSpin, PipeTraveler, endpoint_pose};
use crate::pipes::events::{PipeContactEvent, PipeExitEvent};
use crate::pipes::traversal::{TransitGuard, TraversalSkip, arrive, check_entry};

/// Re-arm endpoints whose settle delay has elapsed.
pub(crate) fn tick_pipe_ignore_sets(
    time: Res<Time>,
    mut pipes: Query<(Entity, &mut Pipe)>,
    mut travelers: Query<&mut PipeTraveler>,
) {
    let dt = time.delta_secs();

    for (pipe_entity, mut pipe) in &mut pipes {
        if pipe.ignore.is_empty() {
            continue;
        }

        for released in pipe.ignore.tick(dt) {
            debug!("[PIPE] {:?} re-armed for {:?}", pipe.name, released);
            if let Ok(mut traveler) = travelers.get_mut(released) {
                if traveler.transit == Some(pipe_entity) {
                    traveler.transit = None;
                }
            }
        }
    }
}

/// Translate avian sensor contacts into pipe contact/exit events.
pub(crate) fn forward_pipe_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    pipes: Query<(), With<Pipe>>,
    travelers: Query<(), With<PipeTraveler>>,
    mut contact_events: MessageWriter<PipeContactEvent>,
    mut exit_events: MessageWriter<PipeExitEvent>,
) {
    for event in collision_start_events.read() {
        if let Some((pipe, entity)) =
            match_pipe_pair(event.collider1, event.collider2, &pipes, &travelers)
        {
            contact_events.write(PipeContactEvent { entity, pipe });
        }
    }

    for event in collision_end_events.read() {
        if let Some((pipe, entity)) =
            match_pipe_pair(event.collider1, event.collider2, &pipes, &travelers)
        {
            exit_events.write(PipeExitEvent { entity, pipe });
        }
    }
}

fn match_pipe_pair(
    a: Entity,
    b: Entity,
    pipes: &Query<(), With<Pipe>>,
    travelers: &Query<(), With<PipeTraveler>>,
) -> Option<(Entity, Entity)> {
    if pipes.contains(a) && travelers.contains(b) {
        Some((a, b))
    } else if pipes.contains(b) && travelers.contains(a) {
        Some((b, a))
    } else {
        None
    }
}

/// Teleport travelers that entered a pipe to its paired endpoint.
pub(crate) fn apply_pipe_traversal(
    mut contact_events: MessageReader<PipeContactEvent>,
    mut pipes: Query<(&mut Pipe, &GlobalTransform)>,
    mut travelers: Query<(
        &mut Transform,
        &mut LinearVelocity,
        &mut MovementState,
        &mut PipeTraveler,
    )>,
) {
    let mut guard = TransitGuard::default();

    for contact in contact_events.read() {
        let Ok((mut transform, mut velocity, mut state, mut traveler)) =
            travelers.get_mut(contact.entity)
        else {
            continue;
        };

        let Ok((source, _)) = pipes.get(contact.pipe) else {
            continue;
        };
        let tuning = source.tuning;
        let source_name = source.name.clone();
        let destination = match check_entry(contact.entity, &source.ignore, source.target, &guard)
        {
            Ok(destination) => destination,
            Err(TraversalSkip::Unpaired) => {
                warn!(
                    "[PIPE] {:?} has no target; ignoring {:?}",
                    source_name, contact.entity
                );
                continue;
            }
            Err(skip) => {
                debug!(
                    "[PIPE] {:?} skipped {:?}: {:?}",
                    source_name, contact.entity, skip
                );
                continue;
            }
        };

        let Ok((mut target, target_transform)) = pipes.get_mut(destination) else {
            warn!(
                "[PIPE] {:?} targets missing endpoint {:?}; ignoring {:?}",
                source_name, destination, contact.entity
            );
            continue;
        };

        let (position, angle) = endpoint_pose(target_transform);
        let launch = arrive(
            contact.entity,
            &tuning,
            &mut target.ignore,
            position,
            angle,
            &mut guard,
        );

        transform.translation.x = launch.position.x;
        transform.translation.y = launch.position.y;
        velocity.0 = launch.velocity;
        state.begin_launch(to_screen(launch.velocity), tuning.launch_period);
        traveler.transit = Some(destination);

        info!(
            "[PIPE] {:?} {:?} -> {:?} at {:?}, velocity {:?}",
            contact.entity, source_name, target.name, launch.position, launch.velocity
        );
    }
}

/// Leaving a trigger region re-arms that endpoint early.
pub(crate) fn prune_pipe_ignore_sets(
    mut exit_events: MessageReader<PipeExitEvent>,
    mut pipes: Query<&mut Pipe>,
    mut travelers: Query<&mut PipeTraveler>,
) {
    for exit in exit_events.read() {
        let Ok(mut pipe) = pipes.get_mut(exit.pipe) else {
            continue;
        };
        if !pipe.ignore.remove(&exit.entity) {
            continue;
        }

        debug!(
            "[PIPE] {:?} pruned {:?} on exit",
            pipe.name, exit.entity
        );
        if let Ok(mut traveler) = travelers.get_mut(exit.entity) {
            if traveler.transit == Some(exit.pipe) {
                traveler.transit = None;
            }
        }
    }
}

pub(crate) fn spin_pipes(time: Res<Time>, mut pipes: Query<(&mut Transform, &PipeSpin), With<Pipe>>) {
    let dt = time.delta_secs();
    for (mut transform, spin) in &mut pipes {
        transform.rotate_z(spin.0 * dt);
    }
}
