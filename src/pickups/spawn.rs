use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::pickups::components::{BobMotion, Pickup, PickupKind};
use crate::player::GameLayer;

const PICKUP_SIZE: Vec2 = Vec2::new(14.0, 14.0);
const HEAL_COLOR: Color = Color::srgb(0.54, 0.82, 0.5);
const DASH_COLOR: Color = Color::srgb(0.95, 0.62, 0.3);
const DOUBLE_JUMP_COLOR: Color = Color::srgb(0.45, 0.75, 0.95);
const WALL_CLING_COLOR: Color = Color::srgb(0.72, 0.62, 0.9);

fn pickup_color(kind: PickupKind) -> Color {
    match kind {
        PickupKind::Heal(_) => HEAL_COLOR,
        PickupKind::Dash => DASH_COLOR,
        PickupKind::DoubleJump => DOUBLE_JUMP_COLOR,
        PickupKind::WallCling => WALL_CLING_COLOR,
    }
}

/// The bob phase is randomized so neighboring pickups drift out of sync.
pub(crate) fn spawn_pickup(commands: &mut Commands, position: Vec2, kind: PickupKind) {
    let mut rng = rand::rng();
    commands.spawn((
        Pickup { kind },
        BobMotion {
            anchor_y: position.y,
            phase: rng.random_range(0.0..TAU),
        },
        Sprite {
            color: pickup_color(kind),
            custom_size: Some(PICKUP_SIZE),
            ..default()
        },
        Transform::from_translation(position.extend(7.0)),
        (
            Collider::rectangle(PICKUP_SIZE.x, PICKUP_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ),
    ));
}
