mod components;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{
    FragileTile, Launcher, LauncherKind, OneWayPlatform, PendingDespawn, SpiderWeb, Spikes,
    StruckSide,
};
pub use resources::HazardTuning;
pub(crate) use spawn::{
    spawn_fragile_tile, spawn_launcher, spawn_one_way_platform, spawn_spikes, spawn_web,
};

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HazardTuning>().add_systems(
            Update,
            (
                systems::spike_occupancy,
                systems::spike_stay_damage,
                systems::web_slow,
                systems::launcher_occupancy,
                systems::launcher_charge,
                systems::break_fragile_tiles,
                systems::despawn_broken,
                systems::update_one_way_platforms,
            )
                .chain(),
        );
    }
}
