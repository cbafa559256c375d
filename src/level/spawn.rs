//! The demo arena: one screen of terrain, hazards, pickups, and enemies
//! arranged so every ability has a place to be earned and used.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{spawn_enemy, EnemyTuning};
use crate::hazards::{
    spawn_fragile_tile, spawn_launcher, spawn_one_way_platform, spawn_spikes, spawn_web,
    FragileTile, LauncherKind,
};
use crate::level::components::RestSpot;
use crate::pickups::{spawn_pickup, PickupKind};
use crate::player::GameLayer;

const GROUND_COLOR: Color = Color::srgb(0.35, 0.3, 0.28);
const WALL_COLOR: Color = Color::srgb(0.3, 0.26, 0.32);
const REST_SPOT_COLOR: Color = Color::srgb(0.9, 0.55, 0.65);

fn spawn_block(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    color: Color,
    layer: GameLayer,
) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(2.0)),
        (
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            CollisionLayers::new(layer, [GameLayer::Player, GameLayer::Enemy]),
        ),
    ));
}

fn spawn_rest_spot(commands: &mut Commands, position: Vec2) {
    let size = Vec2::new(36.0, 16.0);
    commands.spawn((
        RestSpot,
        Sprite {
            color: REST_SPOT_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(3.0)),
        (
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Sensor,
                [GameLayer::Player, GameLayer::PlayerAttack],
            ),
        ),
    ));
}

pub(crate) fn spawn_level(mut commands: Commands, enemy_tuning: Res<EnemyTuning>) {
    // Terrain. The floor and ledges are ground; the boundary walls and the
    // tower are climbable.
    spawn_block(
        &mut commands,
        Vec2::new(0.0, -100.0),
        Vec2::new(1280.0, 40.0),
        GROUND_COLOR,
        GameLayer::Ground,
    );
    spawn_block(
        &mut commands,
        Vec2::new(-630.0, 120.0),
        Vec2::new(20.0, 480.0),
        WALL_COLOR,
        GameLayer::Wall,
    );
    spawn_block(
        &mut commands,
        Vec2::new(630.0, 120.0),
        Vec2::new(20.0, 480.0),
        WALL_COLOR,
        GameLayer::Wall,
    );
    spawn_block(
        &mut commands,
        Vec2::new(-180.0, -10.0),
        Vec2::new(160.0, 20.0),
        GROUND_COLOR,
        GameLayer::Ground,
    );
    spawn_block(
        &mut commands,
        Vec2::new(80.0, 80.0),
        Vec2::new(140.0, 20.0),
        GROUND_COLOR,
        GameLayer::Ground,
    );
    spawn_block(
        &mut commands,
        Vec2::new(300.0, 20.0),
        Vec2::new(24.0, 200.0),
        WALL_COLOR,
        GameLayer::Wall,
    );

    spawn_one_way_platform(&mut commands, Vec2::new(-420.0, -20.0), Vec2::new(120.0, 12.0));
    spawn_one_way_platform(&mut commands, Vec2::new(480.0, 20.0), Vec2::new(120.0, 12.0));

    // Hazards.
    spawn_spikes(&mut commands, Vec2::new(0.0, -72.0), Vec2::new(120.0, 16.0));
    spawn_web(&mut commands, Vec2::new(-300.0, -40.0), Vec2::new(80.0, 80.0));
    spawn_launcher(
        &mut commands,
        Vec2::new(160.0, -64.0),
        Vec2::new(40.0, 32.0),
        LauncherKind::Fixed(Vec2::Y),
    );
    spawn_launcher(
        &mut commands,
        Vec2::new(396.0, -64.0),
        Vec2::new(40.0, 32.0),
        LauncherKind::InputDirected {
            fallback: Vec2::Y,
            fire_without_input: false,
        },
    );
    // Only a swing from the left cracks this one; it hides the cling unlock.
    spawn_fragile_tile(
        &mut commands,
        Vec2::new(560.0, -56.0),
        Vec2::new(48.0, 48.0),
        FragileTile::new(false, false, true, false),
    );
    // Bridge over the spikes. Breaks from above, so a downward swing while
    // standing on it drops the cat straight in.
    spawn_fragile_tile(
        &mut commands,
        Vec2::new(0.0, -32.0),
        Vec2::new(48.0, 48.0),
        FragileTile::new(true, false, false, false),
    );

    // Rest spots.
    spawn_rest_spot(&mut commands, Vec2::new(-480.0, -72.0));
    spawn_rest_spot(&mut commands, Vec2::new(80.0, 98.0));

    // Pickups.
    spawn_pickup(&mut commands, Vec2::new(-180.0, 34.0), PickupKind::DoubleJump);
    spawn_pickup(&mut commands, Vec2::new(80.0, 124.0), PickupKind::Dash);
    spawn_pickup(&mut commands, Vec2::new(608.0, -52.0), PickupKind::WallCling);
    spawn_pickup(&mut commands, Vec2::new(480.0, 54.0), PickupKind::Heal(1));

    // Enemies.
    spawn_enemy(
        &mut commands,
        &enemy_tuning,
        Vec2::new(-160.0, -62.0),
        Some((-240.0, -90.0)),
    );
    spawn_enemy(
        &mut commands,
        &enemy_tuning,
        Vec2::new(60.0, 100.0),
        Some((24.0, 136.0)),
    );

    info!("Level spawned");
}
