//! Core domain: system sets ordering one fixed tick.

use bevy::prelude::*;

/// Stages of a fixed tick, run in declaration order.
///
/// A teleport applied in `Traversal` on tick N is first seen by `Contacts`
/// and `Movement` on tick N+1.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Pipe settle countdowns
    Settle,
    /// Ground and wall probes
    Contacts,
    /// Integrator, mode machine and wall handling
    Movement,
    /// Pipe contact handling and teleports
    Traversal,
    /// Input edge reset and other end-of-tick bookkeeping
    Cleanup,
}
