//! Loader for the RON tuning file read at startup.

use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::combat::{CombatTuning, EnemyTuning};
use crate::hazards::HazardTuning;
use crate::player::PlayerTuning;

/// Error type for tuning load failures.
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

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// All tunable gameplay numbers, grouped per domain. Every section and every
/// field inside a section may be omitted; missing values keep the compiled-in
/// defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub player: PlayerTuning,
    pub combat: CombatTuning,
    pub enemies: EnemyTuning,
    pub hazards: HazardTuning,
}

/// Loads the tuning file as a single RON struct.
pub fn load_tuning_file(path: &Path) -> Result<GameTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}
