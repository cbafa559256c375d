//! Core domain: camera setup, hit-freeze token, and respawn anchor.

mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{HitFreeze, RespawnAnchor};

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HitFreeze>()
            .init_resource::<RespawnAnchor>()
            .add_systems(Startup, setup_camera);
    }
}
