mod components;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::{BobMotion, Pickup, PickupKind};
pub(crate) use spawn::spawn_pickup;

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (systems::bob_pickups, systems::collect_pickups).chain(),
        );
    }
}
