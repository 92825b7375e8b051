//! Loader for RON (or JSON) content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{LevelDef, MovementDef};

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Everything read from the data directory.
#[derive(Debug, Clone)]
pub struct GameContent {
    pub movement: MovementDef,
    pub level: LevelDef,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single struct from text, as JSON when `json` is set and RON otherwise.
pub fn parse_content<T>(contents: &str, json: bool) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    if json {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    } else {
        ron_options().from_str(contents).map_err(|e| e.to_string())
    }
}

/// Load a single struct from a file, picking the format by extension.
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let json = path.extension().is_some_and(|ext| ext == "json");
    parse_content(&contents, json).map_err(|e| ContentLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

/// Load the first of `stem.ron` / `stem.json` that exists.
fn load_named<T>(base_path: &Path, stem: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let ron_path = base_path.join(format!("{stem}.ron"));
    let json_path = base_path.join(format!("{stem}.json"));
    if !ron_path.exists() && json_path.exists() {
        load_single_file(&json_path)
    } else {
        load_single_file(&ron_path)
    }
}

/// Load all content from the data directory.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<GameContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let movement = match load_named::<MovementDef>(base_path, "movement") {
        Ok(movement) => Some(movement),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let level = match load_named::<LevelDef>(base_path, "level") {
        Ok(level) => Some(level),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (movement, level) {
        (Some(movement), Some(level)) if errors.is_empty() => Ok(GameContent { movement, level }),
        _ => Err(errors),
    }
}
