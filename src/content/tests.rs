//! Content domain: tests for parsing, defaults and validation.

use std::path::{Path, PathBuf};

use super::data::{BlockKind, LevelDef, MovementDef};
use super::loader::{load_all_content, load_single_file, parse_content};
use super::validation::{validate_level, validate_movement};
use crate::level::LevelLayout;
use crate::movement::{LaunchMemoryReset, MovementTuning};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data")
}

// -----------------------------------------------------------------------------
// Shipped data
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_content_loads_and_validates() {
    let content = match load_all_content(&data_dir()) {
        Ok(content) => content,
        Err(errors) => panic!("content failed to load: {:?}", errors),
    };

    assert!(validate_movement(&content.movement).is_empty());
    assert!(validate_level(&content.level).is_empty());
    assert!(!content.level.pipes.is_empty());
    assert!(
        content
            .level
            .blocks
            .iter()
            .any(|block| block.kind == BlockKind::Ground)
    );
}

#[test]
fn test_shipped_movement_matches_defaults() {
    let movement: MovementDef = load_single_file(&data_dir().join("movement.ron")).unwrap();
    let tuning = MovementTuning::from(&movement);
    let defaults = MovementTuning::default();

    assert_eq!(tuning.speed, defaults.speed);
    assert_eq!(tuning.jump_velocity, defaults.jump_velocity);
    assert_eq!(tuning.slow_walk_threshold, defaults.slow_walk_threshold);
}

#[test]
fn test_missing_directory_reports_both_files() {
    let errors = load_all_content(Path::new("/nonexistent/pipeball")).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().contains("movement"));
    assert!(errors[1].to_string().contains("level"));
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_partial_movement_uses_defaults() {
    let movement: MovementDef =
        parse_content("(speed: 250.0, launch_memory_reset: Immediate)", false).unwrap();
    assert_eq!(movement.speed, 250.0);
    assert_eq!(movement.launch_memory_reset, LaunchMemoryReset::Immediate);
    assert_eq!(movement.jump_velocity, MovementTuning::default().jump_velocity);
}

#[test]
fn test_level_parses_from_json() {
    let json = r#"{
        "player_spawn": [0.0, 100.0],
        "blocks": [{ "kind": "Ground", "center": [0.0, -200.0], "size": [800.0, 40.0] }],
        "pipes": [{
            "id": "p",
            "a": { "position": [-100.0, 0.0] },
            "b": { "position": [100.0, 0.0], "rotation_degrees": 90.0 }
        }]
    }"#;
    let level: LevelDef = parse_content(json, true).unwrap();
    let layout = LevelLayout::from(&level);

    assert_eq!(layout.blocks.len(), 1);
    assert_eq!(layout.pipes.len(), 1);
    assert!((layout.pipes[0].b.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    assert_eq!(layout.pipes[0].a.rotation, 0.0);
    assert_eq!(layout.pipes[0].tuning.exit_velocity, 500.0);
}

#[test]
fn test_malformed_ron_is_an_error() {
    assert!(parse_content::<LevelDef>("(player_spawn: ", false).is_err());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_validation_flags_bad_movement() {
    let movement = MovementDef {
        jump_velocity: 500.0,
        slow_walk_threshold: 1.5,
        floor_friction: f32::NAN,
        ..Default::default()
    };
    let errors = validate_movement(&movement);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert!(fields.contains(&"jump_velocity"));
    assert!(fields.contains(&"slow_walk_threshold"));
    assert!(fields.contains(&"floor_friction"));
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_validation_flags_duplicate_pipe_ids() {
    let level: LevelDef = parse_content(
        r#"(
            player_spawn: (0.0, 0.0),
            pipes: [
                (id: "same", a: (position: (0.0, 0.0)), b: (position: (10.0, 0.0))),
                (id: "same", a: (position: (20.0, 0.0)), b: (position: (30.0, 0.0))),
            ],
        )"#,
        false,
    )
    .unwrap();

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "id");
}

#[test]
fn test_validation_flags_bad_blocks_and_tuning() {
    let level: LevelDef = parse_content(
        r#"(
            player_spawn: (0.0, 0.0),
            blocks: [(kind: Wall, center: (0.0, 0.0), size: (0.0, 100.0))],
            pipes: [
                (
                    id: "p",
                    a: (position: (0.0, 0.0)),
                    b: (position: (0.0, 0.0)),
                    tuning: (settle_delay: -1.0),
                ),
            ],
        )"#,
        false,
    )
    .unwrap();

    let fields: Vec<&str> = validate_level(&level).iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["size", "b.position", "settle_delay"]);
}
