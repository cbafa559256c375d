//! UI domain: in-run HUD elements and death flow.

mod death;
mod hud_player;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud_player::spawn_health_bar)
            .add_systems(
                Update,
                (
                    hud_player::update_health_bar,
                    hud_player::pulse_health_bar,
                    death::show_death_overlay,
                    death::handle_retry,
                    death::handle_quit,
                    death::dismiss_death_overlay,
                ),
            );
    }
}
