//! Debug tooling for fast iteration, compiled behind the `dev-tools`
//! feature.
//!
//! Hotkeys:
//! - F1 / backtick: toggle the info overlay
//! - Ctrl+I: toggle damage-proofing
//! - Ctrl+G: grant every ability
//! - Ctrl+H: full heal
//! - Ctrl+K: take a test hit
//! - Ctrl+R: respawn at the anchor

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

pub use state::DebugState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                systems::handle_debug_hotkeys,
                systems::apply_damage_proof,
                systems::update_status_message,
                systems::update_debug_info_overlay,
            ),
        );
    }
}
