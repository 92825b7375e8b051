//! Pipes domain: tests for teleport math, ignore sets and re-entrancy.

use std::f32::consts::{FRAC_PI_2, PI};
use std::time::Duration;

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::components::{Pipe, PipeTraveler};
use super::events::{PipeContactEvent, PipeExitEvent};
use super::systems::{apply_pipe_traversal, prune_pipe_ignore_sets, tick_pipe_ignore_sets};
use super::traversal::{
    IgnoreSet, PipeTuning, TransitGuard, TraversalSkip, arrive, check_entry, compute_launch,
    facing,
};
use crate::movement::MovementState;

fn assert_vec_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

// -----------------------------------------------------------------------------
// Facing and launch math
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_rotation() {
    assert_vec_close(facing(0.0), Vec2::Y);
    assert_vec_close(facing(FRAC_PI_2), Vec2::NEG_X);
    assert_vec_close(facing(PI), Vec2::NEG_Y);
    assert_vec_close(facing(-FRAC_PI_2), Vec2::X);
}

#[test]
fn test_facing_degenerate_rotation_is_zero() {
    assert_eq!(facing(f32::NAN), Vec2::ZERO);
    assert_eq!(facing(f32::INFINITY), Vec2::ZERO);
}

#[test]
fn test_launch_exits_along_destination_facing() {
    let tuning = PipeTuning {
        exit_velocity: 500.0,
        exit_spawn_distance: 25.0,
        ..Default::default()
    };
    let destination = Vec2::new(100.0, -40.0);

    let up = compute_launch(destination, 0.0, &tuning);
    assert_vec_close(up.position, Vec2::new(100.0, -15.0));
    assert_vec_close(up.velocity, Vec2::new(0.0, 500.0));

    let right = compute_launch(destination, -FRAC_PI_2, &tuning);
    assert_vec_close(right.position, Vec2::new(125.0, -40.0));
    assert_vec_close(right.velocity, Vec2::new(500.0, 0.0));
}

#[test]
fn test_launch_lateral_strength_skews_sideways() {
    let tuning = PipeTuning {
        exit_velocity: 500.0,
        lateral_strength: 100.0,
        ..Default::default()
    };

    let launch = compute_launch(Vec2::ZERO, 0.0, &tuning);
    // perp of +Y is -X
    assert_vec_close(launch.velocity, Vec2::new(-100.0, 500.0));
}

#[test]
fn test_launch_never_produces_nan() {
    let tuning = PipeTuning {
        exit_velocity: f32::NAN,
        exit_spawn_distance: f32::INFINITY,
        ..Default::default()
    };
    let launch = compute_launch(Vec2::new(5.0, 6.0), 0.3, &tuning);
    assert_eq!(launch.velocity, Vec2::ZERO);
    assert_eq!(launch.position, Vec2::new(5.0, 6.0));

    let degenerate = compute_launch(Vec2::new(5.0, 6.0), f32::NAN, &PipeTuning::default());
    assert_eq!(degenerate.velocity, Vec2::ZERO);
    assert_eq!(degenerate.position, Vec2::new(5.0, 6.0));

    let zero = PipeTuning {
        exit_velocity: 0.0,
        ..Default::default()
    };
    assert_eq!(compute_launch(Vec2::ZERO, 1.0, &zero).velocity, Vec2::ZERO);
}

#[test]
fn test_launch_recomputed_from_current_rotation() {
    let tuning = PipeTuning::default();
    let before = compute_launch(Vec2::ZERO, 0.0, &tuning);
    let after = compute_launch(Vec2::ZERO, PI, &tuning);
    assert_vec_close(before.velocity, -after.velocity);
}

// -----------------------------------------------------------------------------
// IgnoreSet
// -----------------------------------------------------------------------------

#[test]
fn test_ignore_set_releases_after_settle_delay() {
    let mut set = IgnoreSet::default();
    set.insert(1u32, 0.25);
    assert!(set.contains(&1));

    assert!(set.tick(0.125).is_empty());
    assert!(set.contains(&1));

    assert_eq!(set.tick(0.125), vec![1]);
    assert!(!set.contains(&1));
    assert!(set.is_empty());
}

#[test]
fn test_ignore_set_fixed_step_release_tick() {
    let mut set = IgnoreSet::default();
    set.insert(7u32, 0.25);

    let dt = 1.0 / 60.0;
    let mut ticks = 0;
    while set.contains(&7) {
        set.tick(dt);
        ticks += 1;
        assert!(ticks <= 16);
    }
    assert_eq!(ticks, 15);
}

#[test]
fn test_ignore_set_tracks_entities_independently() {
    let mut set = IgnoreSet::default();
    set.insert(1u32, 0.25);
    set.tick(0.125);
    set.insert(2u32, 0.25);
    assert!(set.contains(&1) && set.contains(&2));

    assert_eq!(set.tick(0.125), vec![1]);
    assert!(set.contains(&2));
    assert_eq!(set.remaining(&2), Some(0.125));

    assert!(set.remove(&2));
    assert!(!set.remove(&2));
    assert!(set.is_empty());
}

#[test]
fn test_ignore_set_reinsert_restarts_countdown() {
    let mut set = IgnoreSet::default();
    set.insert(1u32, 0.25);
    set.tick(0.2);
    set.insert(1u32, 0.25);
    assert!(set.tick(0.2).is_empty());
    assert_eq!(set.tick(0.05), vec![1]);
}

// -----------------------------------------------------------------------------
// Traversal decisions
// -----------------------------------------------------------------------------

#[test]
fn test_traversal_teleports_to_paired_endpoint() {
    let player = Entity::from_bits(42);
    let pipe_b = Entity::from_bits(2);

    let a_ignore = IgnoreSet::default();
    let mut b_ignore = IgnoreSet::default();
    let mut guard = TransitGuard::default();
    let tuning = PipeTuning::default();

    let destination = check_entry(player, &a_ignore, Some(pipe_b), &guard);
    assert_eq!(destination, Ok(pipe_b));

    let b_position = Vec2::new(300.0, 50.0);
    let launch = arrive(player, &tuning, &mut b_ignore, b_position, 0.0, &mut guard);

    assert_vec_close(launch.position, b_position + facing(0.0) * tuning.exit_spawn_distance);
    assert_vec_close(launch.velocity, facing(0.0) * tuning.exit_velocity);
    assert!(b_ignore.contains(&player));
    assert_eq!(b_ignore.remaining(&player), Some(tuning.settle_delay));
    assert!(!a_ignore.contains(&player));
}

#[test]
fn test_second_trigger_in_same_tick_is_suppressed() {
    let player = Entity::from_bits(42);
    let pipe_a = Entity::from_bits(1);
    let pipe_b = Entity::from_bits(2);

    let a_ignore = IgnoreSet::default();
    let mut b_ignore = IgnoreSet::default();
    let mut guard = TransitGuard::default();
    let tuning = PipeTuning::default();

    let destination = check_entry(player, &a_ignore, Some(pipe_b), &guard).unwrap();
    assert_eq!(destination, pipe_b);
    arrive(player, &tuning, &mut b_ignore, Vec2::ZERO, 0.0, &mut guard);

    // Overlapping A again in the same tick
    assert_eq!(
        check_entry(player, &a_ignore, Some(pipe_b), &guard),
        Err(TraversalSkip::AlreadyMoved)
    );

    // Overlapping B (the destination) on the next tick is covered by its ignore set
    let next_tick = TransitGuard::default();
    assert_eq!(
        check_entry(player, &b_ignore, Some(pipe_a), &next_tick),
        Err(TraversalSkip::Ignored)
    );

    // Once settled, B works again
    b_ignore.tick(tuning.settle_delay);
    assert_eq!(
        check_entry(player, &b_ignore, Some(pipe_a), &next_tick),
        Ok(pipe_a)
    );
}

#[test]
fn test_other_travelers_are_not_blocked() {
    let player_one = Entity::from_bits(42);
    let player_two = Entity::from_bits(43);
    let pipe_a = Entity::from_bits(1);

    let mut b_ignore = IgnoreSet::default();
    let mut guard = TransitGuard::default();
    arrive(
        player_one,
        &PipeTuning::default(),
        &mut b_ignore,
        Vec2::ZERO,
        0.0,
        &mut guard,
    );

    assert_eq!(
        check_entry(player_two, &b_ignore, Some(pipe_a), &guard),
        Ok(pipe_a)
    );
}

#[test]
fn test_unpaired_endpoint_is_a_no_op() {
    let player = Entity::from_bits(42);
    let ignore = IgnoreSet::default();
    let guard = TransitGuard::default();

    assert_eq!(
        check_entry(player, &ignore, None, &guard),
        Err(TraversalSkip::Unpaired)
    );
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

struct PipeWorld {
    world: World,
    pipe_a: Entity,
    pipe_b: Entity,
    player: Entity,
}

/// Pipe A at the origin facing up, pipe B at (200, 50) facing right.
fn pipe_world() -> PipeWorld {
    let mut world = World::new();
    world.init_resource::<Messages<PipeContactEvent>>();
    world.init_resource::<Messages<PipeExitEvent>>();
    world.insert_resource(Time::<()>::default());

    let pipe_a = world.spawn_empty().id();
    let pipe_b = world.spawn_empty().id();
    let a_transform = Transform::default();
    let b_transform =
        Transform::from_xyz(200.0, 50.0, 0.0).with_rotation(Quat::from_rotation_z(-FRAC_PI_2));
    world.entity_mut(pipe_a).insert((
        Pipe::new("a", Some(pipe_b), PipeTuning::default()),
        a_transform,
        GlobalTransform::from(a_transform),
    ));
    world.entity_mut(pipe_b).insert((
        Pipe::new("b", Some(pipe_a), PipeTuning::default()),
        b_transform,
        GlobalTransform::from(b_transform),
    ));

    let player = world
        .spawn((
            Transform::from_xyz(0.0, 0.0, 1.0),
            LinearVelocity(Vec2::new(-50.0, -80.0)),
            MovementState::default(),
            PipeTraveler::default(),
        ))
        .id();

    PipeWorld {
        world,
        pipe_a,
        pipe_b,
        player,
    }
}

fn enter_pipe(pw: &mut PipeWorld, pipe: Entity) {
    let entity = pw.player;
    let mut contacts = pw.world.resource_mut::<Messages<PipeContactEvent>>();
    contacts.clear();
    contacts.write(PipeContactEvent { entity, pipe });
    pw.world.run_system_once(apply_pipe_traversal).unwrap();
}

#[test]
fn test_traversal_system_moves_and_launches_traveler() {
    let mut pw = pipe_world();
    let (pipe_a, pipe_b, player) = (pw.pipe_a, pw.pipe_b, pw.player);
    enter_pipe(&mut pw, pipe_a);

    let tuning = PipeTuning::default();
    let transform = pw.world.get::<Transform>(player).unwrap();
    assert_vec_close(transform.translation.truncate(), Vec2::new(225.0, 50.0));
    assert_eq!(transform.translation.z, 1.0);

    let velocity = pw.world.get::<LinearVelocity>(player).unwrap();
    assert_vec_close(velocity.0, Vec2::new(tuning.exit_velocity, 0.0));

    let state = pw.world.get::<MovementState>(player).unwrap();
    assert!(state.launched);
    assert_eq!(state.input_lock, tuning.launch_period);
    assert_eq!(state.launch_sign, 1.0);
    assert_vec_close(state.launch_velocity, Vec2::new(tuning.exit_velocity, 0.0));

    let traveler = pw.world.get::<PipeTraveler>(player).unwrap();
    assert_eq!(traveler.transit, Some(pipe_b));
    assert!(pw.world.get::<Pipe>(pipe_b).unwrap().ignore.contains(&player));
    assert!(!pw.world.get::<Pipe>(pipe_a).unwrap().ignore.contains(&player));
}

#[test]
fn test_traversal_system_skips_settling_destination() {
    let mut pw = pipe_world();
    let (pipe_a, pipe_b, player) = (pw.pipe_a, pw.pipe_b, pw.player);
    enter_pipe(&mut pw, pipe_a);

    // Landing inside B's trigger does not bounce the traveler back
    enter_pipe(&mut pw, pipe_b);
    let transform = pw.world.get::<Transform>(player).unwrap();
    assert_vec_close(transform.translation.truncate(), Vec2::new(225.0, 50.0));
    assert_eq!(
        pw.world.get::<PipeTraveler>(player).unwrap().transit,
        Some(pipe_b)
    );
}

#[test]
fn test_settle_delay_returns_traveler_to_idle() {
    let mut pw = pipe_world();
    let (pipe_a, pipe_b, player) = (pw.pipe_a, pw.pipe_b, pw.player);
    enter_pipe(&mut pw, pipe_a);

    pw.world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(100));
    pw.world.run_system_once(tick_pipe_ignore_sets).unwrap();
    assert!(pw.world.get::<Pipe>(pipe_b).unwrap().ignore.contains(&player));
    assert_eq!(
        pw.world.get::<PipeTraveler>(player).unwrap().transit,
        Some(pipe_b)
    );

    pw.world
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(150));
    pw.world.run_system_once(tick_pipe_ignore_sets).unwrap();
    assert!(pw.world.get::<Pipe>(pipe_b).unwrap().ignore.is_empty());
    assert_eq!(pw.world.get::<PipeTraveler>(player).unwrap().transit, None);
}

#[test]
fn test_exit_event_prunes_ignore_entry_early() {
    let mut pw = pipe_world();
    let (pipe_a, pipe_b, player) = (pw.pipe_a, pw.pipe_b, pw.player);
    enter_pipe(&mut pw, pipe_a);

    pw.world
        .resource_mut::<Messages<PipeExitEvent>>()
        .write(PipeExitEvent {
            entity: player,
            pipe: pipe_b,
        });
    pw.world.run_system_once(prune_pipe_ignore_sets).unwrap();

    assert!(pw.world.get::<Pipe>(pipe_b).unwrap().ignore.is_empty());
    assert_eq!(pw.world.get::<PipeTraveler>(player).unwrap().transit, None);

    // B is armed again
    enter_pipe(&mut pw, pipe_b);
    let transform = pw.world.get::<Transform>(player).unwrap();
    assert_vec_close(transform.translation.truncate(), Vec2::new(0.0, 25.0));
    assert_eq!(
        pw.world.get::<PipeTraveler>(player).unwrap().transit,
        Some(pipe_a)
    );
}
