//! Level domain: spawning static geometry, pipe pairs and the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::BlockKind;
use crate::level::layout::{BlockLayout, LevelLayout, PipeEndpointLayout, PipePairLayout};
use crate::movement::{Abilities, GameLayer, Ground, MovementState, Player, Wall};
use crate::pipes::{Pipe, PipeSpin, PipeTraveler};
use crate::sprites::AnimationClip;

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PIPE_SIZE: Vec2 = Vec2::new(48.0, 24.0);

/// Marker for everything spawned from a `LevelLayout`.
#[derive(Component, Debug)]
pub struct LevelEntity;

pub(crate) fn spawn_level(mut commands: Commands, layout: Res<LevelLayout>) {
    for block in &layout.blocks {
        spawn_block(&mut commands, block);
    }
    for pair in &layout.pipes {
        spawn_pipe_pair(&mut commands, pair);
    }
    info!(
        "Spawned level: {} ground, {} walls, {} pipe pairs",
        layout.block_count(BlockKind::Ground),
        layout.block_count(BlockKind::Wall),
        layout.pipes.len()
    );
}

fn spawn_block(commands: &mut Commands, block: &BlockLayout) {
    let sprite = Sprite {
        color: match block.kind {
            BlockKind::Ground => Color::srgb(0.4, 0.5, 0.4),
            BlockKind::Wall => Color::srgb(0.3, 0.3, 0.4),
        },
        custom_size: Some(block.size),
        ..default()
    };
    let body = (
        LevelEntity,
        sprite,
        Transform::from_translation(block.center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(block.size.x, block.size.y),
    );

    match block.kind {
        BlockKind::Ground => {
            commands.spawn((
                body,
                Ground,
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
            ));
        }
        BlockKind::Wall => {
            commands.spawn((
                body,
                Wall,
                CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
            ));
        }
    }
}

/// Spawn both endpoints, each targeting the other.
fn spawn_pipe_pair(commands: &mut Commands, pair: &PipePairLayout) {
    let a = commands.spawn_empty().id();
    let b = commands.spawn_empty().id();

    insert_pipe_endpoint(commands, a, format!("{}/a", pair.id), b, &pair.a, pair);
    insert_pipe_endpoint(commands, b, format!("{}/b", pair.id), a, &pair.b, pair);
}

fn insert_pipe_endpoint(
    commands: &mut Commands,
    entity: Entity,
    name: String,
    target: Entity,
    endpoint: &PipeEndpointLayout,
    pair: &PipePairLayout,
) {
    let mut pipe = commands.entity(entity);
    pipe.insert((
        LevelEntity,
        Pipe::new(name, Some(target), pair.tuning),
        Sprite {
            color: Color::srgb(0.2, 0.7, 0.3),
            custom_size: Some(PIPE_SIZE),
            ..default()
        },
        Transform::from_translation(endpoint.position.extend(0.5))
            .with_rotation(Quat::from_rotation_z(endpoint.rotation)),
        Collider::rectangle(PIPE_SIZE.x, PIPE_SIZE.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Pipe, [GameLayer::Player]),
    ));
    if endpoint.spin != 0.0 {
        pipe.insert(PipeSpin(endpoint.spin));
    }
}

pub(crate) fn spawn_player(mut commands: Commands, layout: Res<LevelLayout>) {
    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::default(),
            Abilities::default(),
            PipeTraveler::default(),
        ),
        // Rendering
        (
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            AnimationClip::default(),
        ),
        Transform::from_translation(layout.player_spawn.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the movement step
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Pipe],
            ),
        ),
    ));
}
