mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{
    Abilities, AirPhase, Facing, GameLayer, MovementState, Player, WallContact,
};
pub use resources::{PlayerInput, PlayerTuning};
pub(crate) use systems::collider_half_extents;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::detect_ground,
                    systems::detect_walls,
                    systems::detect_ceiling,
                    systems::update_timers,
                    systems::apply_locomotion,
                    systems::apply_jump,
                    systems::apply_wall_cling,
                    systems::apply_dash,
                    systems::apply_gravity,
                    systems::sync_air_phase,
                    systems::update_facing,
                )
                    .chain(),
            );
    }
}
