use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackState, CombatState, CombatTuning, Health};
use crate::core::RespawnAnchor;
use crate::player::components::{Abilities, GameLayer, MovementState, Player};

/// Where the cat wakes up when no rest spot has been used yet.
pub(crate) const PLAYER_SPAWN: Vec2 = Vec2::new(-420.0, -40.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    combat_tuning: Res<CombatTuning>,
    mut anchor: ResMut<RespawnAnchor>,
) {
    *anchor = RespawnAnchor::new(PLAYER_SPAWN);

    commands.spawn((
        (Player, MovementState::default(), Abilities::default()),
        (
            Health::new(combat_tuning.max_health),
            CombatState::default(),
            AttackState::default(),
        ),
        Sprite {
            color: Color::srgb(0.92, 0.82, 0.64),
            custom_size: Some(Vec2::new(28.0, 20.0)),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(10.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(28.0, 20.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            // The controller integrates its own gravity
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Enemy,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));

    info!("Player spawned at {:?}", PLAYER_SPAWN);
}
