//! Level domain: runtime layout resource built from content.

use bevy::prelude::*;

use crate::content::BlockKind;
use crate::pipes::PipeTuning;

/// World-space (+Y up) placement of one static block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub kind: BlockKind,
    pub center: Vec2,
    pub size: Vec2,
}

/// One endpoint of a pipe pair. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipeEndpointLayout {
    pub position: Vec2,
    pub rotation: f32,
    /// Radians per second; zero for a fixed endpoint.
    pub spin: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipePairLayout {
    pub id: String,
    pub a: PipeEndpointLayout,
    pub b: PipeEndpointLayout,
    pub tuning: PipeTuning,
}

#[derive(Resource, Debug, Clone)]
pub struct LevelLayout {
    pub player_spawn: Vec2,
    pub blocks: Vec<BlockLayout>,
    pub pipes: Vec<PipePairLayout>,
}

impl LevelLayout {
    pub fn block_count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|block| block.kind == kind).count()
    }
}

fn block(kind: BlockKind, x: f32, y: f32, w: f32, h: f32) -> BlockLayout {
    BlockLayout {
        kind,
        center: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

/// Built-in test room used when no level file can be read.
impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            player_spawn: Vec2::new(0.0, -100.0),
            blocks: vec![
                block(BlockKind::Ground, 0.0, -200.0, 800.0, 40.0),
                block(BlockKind::Wall, -420.0, 50.0, 40.0, 500.0),
                block(BlockKind::Wall, 420.0, 50.0, 40.0, 500.0),
                block(BlockKind::Ground, -250.0, -50.0, 150.0, 20.0),
                block(BlockKind::Ground, 250.0, 50.0, 150.0, 20.0),
                block(BlockKind::Ground, 0.0, 150.0, 120.0, 20.0),
                // Pillar for wall jumping practice
                block(BlockKind::Wall, -100.0, -80.0, 30.0, 200.0),
            ],
            pipes: vec![
                PipePairLayout {
                    id: "floor".to_string(),
                    a: PipeEndpointLayout {
                        position: Vec2::new(-330.0, -168.0),
                        ..default()
                    },
                    b: PipeEndpointLayout {
                        position: Vec2::new(330.0, -168.0),
                        rotation: 30f32.to_radians(),
                        spin: 0.0,
                    },
                    tuning: PipeTuning::default(),
                },
                PipePairLayout {
                    id: "spinner".to_string(),
                    a: PipeEndpointLayout {
                        position: Vec2::new(250.0, 80.0),
                        ..default()
                    },
                    b: PipeEndpointLayout {
                        position: Vec2::new(0.0, 260.0),
                        rotation: 0.0,
                        spin: 90f32.to_radians(),
                    },
                    tuning: PipeTuning {
                        exit_velocity: 650.0,
                        ..default()
                    },
                },
            ],
        }
    }
}
