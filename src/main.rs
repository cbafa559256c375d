mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hazards;
mod level;
mod pickups;
mod player;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Nine Lives".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // World gravity at pixel scale. The player overrides this with manual
    // gravity (GravityScale(0.0)); enemies and debris fall with the engine.
    .insert_resource(Gravity(Vec2::NEG_Y * 1700.0))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        player::PlayerPlugin,
        combat::CombatPlugin,
        hazards::HazardsPlugin,
        pickups::PickupsPlugin,
        level::LevelPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
