//! Pipes domain: contact events raised by the collision layer.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A traveler started overlapping a pipe's trigger region.
#[derive(Debug, Clone, Copy)]
pub struct PipeContactEvent {
    pub entity: Entity,
    pub pipe: Entity,
}

impl Message for PipeContactEvent {}

/// A traveler stopped overlapping a pipe's trigger region.
#[derive(Debug, Clone, Copy)]
pub struct PipeExitEvent {
    pub entity: Entity,
    pub pipe: Entity,
}

impl Message for PipeExitEvent {}
