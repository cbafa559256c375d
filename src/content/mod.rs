mod loader;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

pub use loader::{ContentLoadError, GameTuning};

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup, so spawn systems read the final numbers
        app.add_systems(PreStartup, load_tuning);
    }
}

/// Reads the tuning file and replaces the default tuning resources. A
/// missing or unparsable file keeps the compiled-in defaults.
fn load_tuning(mut commands: Commands) {
    match loader::load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning.player);
            commands.insert_resource(tuning.combat);
            commands.insert_resource(tuning.enemies);
            commands.insert_resource(tuning.hazards);
        }
        Err(e) => {
            warn!("{e}; using built-in defaults");
        }
    }
}
