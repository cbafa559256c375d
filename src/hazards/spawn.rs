//! Spawn helpers for hazard entities. Level code calls these so the layer
//! and sensor wiring stays in one place.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hazards::components::{
    FragileTile, Launcher, LauncherKind, OneWayPlatform, SpiderWeb, Spikes,
};
use crate::player::GameLayer;

const SPIKE_COLOR: Color = Color::srgb(0.85, 0.32, 0.28);
const WEB_COLOR: Color = Color::srgba(0.88, 0.9, 0.96, 0.6);
const LAUNCHER_COLOR: Color = Color::srgb(0.38, 0.68, 0.88);
const FRAGILE_COLOR: Color = Color::srgb(0.66, 0.5, 0.34);
const PLATFORM_COLOR: Color = Color::srgb(0.52, 0.42, 0.3);

fn sensor_bundle(size: Vec2) -> impl Bundle {
    (
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    )
}

pub(crate) fn spawn_spikes(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        Spikes::default(),
        Sprite {
            color: SPIKE_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(6.0)),
        sensor_bundle(size),
    ));
}

pub(crate) fn spawn_web(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        SpiderWeb::default(),
        Sprite {
            color: WEB_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(5.0)),
        sensor_bundle(size),
    ));
}

pub(crate) fn spawn_launcher(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    kind: LauncherKind,
) {
    commands.spawn((
        Launcher::new(kind),
        Sprite {
            color: LAUNCHER_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(6.0)),
        sensor_bundle(size),
    ));
}

/// Fragile tiles are solid terrain until broken, so they carry the ground
/// layer and additionally accept melee zones.
pub(crate) fn spawn_fragile_tile(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    tile: FragileTile,
) {
    commands.spawn((
        tile,
        Sprite {
            color: FRAGILE_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(4.0)),
        (
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Ground,
                [GameLayer::Player, GameLayer::Enemy, GameLayer::PlayerAttack],
            ),
        ),
    ));
}

pub(crate) fn spawn_one_way_platform(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        OneWayPlatform::default(),
        Sprite {
            color: PLATFORM_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(4.0)),
        (
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
        ),
    ));
}
