mod components;
mod spawn;
mod systems;

use bevy::prelude::*;

pub use components::RestSpot;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_level).add_systems(
            Update,
            (systems::record_checkpoints, systems::break_rest_spots).chain(),
        );
    }
}
