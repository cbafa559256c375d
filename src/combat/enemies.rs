//! Enemy behavior: patrol movement, contact damage, and melee-zone intake.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{AttackZone, Enemy, Health, Invulnerable, Patrol};
use crate::combat::events::DamageEvent;
use crate::combat::resources::EnemyTuning;
use crate::player::{GameLayer, Player};

const ENEMY_COLOR: Color = Color::srgb(0.62, 0.3, 0.66);
const ENEMY_HURT_COLOR: Color = Color::srgb(0.95, 0.55, 0.55);
pub(crate) const ENEMY_SIZE: Vec2 = Vec2::new(26.0, 18.0);

/// Spawns a patrolling enemy. Enemies use the engine's gravity and collide
/// with terrain like any dynamic body.
pub(crate) fn spawn_enemy(
    commands: &mut Commands,
    tuning: &EnemyTuning,
    position: Vec2,
    patrol_bounds: Option<(f32, f32)>,
) {
    let (left_x, right_x) = patrol_bounds.unwrap_or_else(|| {
        warn!(
            "Enemy at {:?} has no patrol bounds, using the default range",
            position
        );
        (
            position.x - tuning.default_patrol_half_range,
            position.x + tuning.default_patrol_half_range,
        )
    });

    commands.spawn((
        (
            Enemy,
            Patrol::new(left_x, right_x),
            Health::new(tuning.max_health),
        ),
        Sprite {
            color: ENEMY_COLOR,
            custom_size: Some(ENEMY_SIZE),
            ..default()
        },
        Transform::from_translation(position.extend(8.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::PlayerAttack,
                ],
            ),
        ),
    ));
}

/// Drives patrol movement between the configured bounds. A knocked-back
/// enemy is left to physics until its immunity window ends.
pub(crate) fn patrol_enemies(
    tuning: Res<EnemyTuning>,
    mut query: Query<
        (
            &Transform,
            &mut Patrol,
            &mut LinearVelocity,
            &mut Sprite,
            Option<&Invulnerable>,
        ),
        With<Enemy>,
    >,
) {
    for (transform, mut patrol, mut velocity, mut sprite, invulnerable) in &mut query {
        if invulnerable.is_some() {
            continue;
        }
        patrol.advance(transform.translation.x);
        velocity.x = patrol.direction() * tuning.move_speed;
        sprite.flip_x = patrol.direction() < 0.0;
    }
}

/// Touching an enemy hurts: full knockback treatment, direction taken from
/// the relative positions.
pub(crate) fn enemy_contact_damage(
    mut collisions: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    tuning: Res<EnemyTuning>,
    enemies: Query<&Transform, With<Enemy>>,
    players: Query<(Entity, &Transform), With<Player>>,
) {
    let Ok((player_entity, player_transform)) = players.single() else {
        return;
    };
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            if a != player_entity {
                continue;
            }
            let Ok(enemy_transform) = enemies.get(b) else {
                continue;
            };
            let direction =
                (enemy_transform.translation - player_transform.translation).truncate();
            damage_events.write(DamageEvent {
                target: player_entity,
                amount: tuning.contact_damage,
                direction,
                skip_knockback: false,
            });
        }
    }
}

/// Melee zones striking enemies. Each zone hits a given enemy at most once;
/// survivors are knocked away from the zone and flash for the immunity
/// window.
pub(crate) fn take_attack_hits(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    tuning: Res<EnemyTuning>,
    mut zones: Query<(&mut AttackZone, &Transform)>,
    mut enemies: Query<
        (
            &Transform,
            &mut Health,
            &mut LinearVelocity,
            &mut Sprite,
            Option<&Invulnerable>,
        ),
        With<Enemy>,
    >,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (zone_entity, target) in pairs {
            let Ok((mut zone, zone_transform)) = zones.get_mut(zone_entity) else {
                continue;
            };
            let Ok((enemy_transform, mut health, mut velocity, mut sprite, invulnerable)) =
                enemies.get_mut(target)
            else {
                continue;
            };
            if invulnerable.is_some() || zone.hit_entities.contains(&target) {
                continue;
            }
            zone.hit_entities.push(target);

            health.damage(zone.damage);
            if health.is_depleted() {
                info!("Enemy defeated");
                commands.entity(target).despawn();
                continue;
            }

            let dx = enemy_transform.translation.x - zone_transform.translation.x;
            let away = if dx > 0.0 {
                1.0
            } else if dx < 0.0 {
                -1.0
            } else if zone.direction.horizontal_sign() != 0.0 {
                zone.direction.horizontal_sign()
            } else {
                1.0
            };
            velocity.x = away * tuning.knockback_speed_x;
            velocity.y = tuning.knockback_speed_y;
            sprite.color = ENEMY_HURT_COLOR;
            commands.entity(target).insert(Invulnerable {
                timer: tuning.hit_iframes,
            });
        }
    }
}

pub(crate) fn tick_enemy_iframes(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Invulnerable, &mut Sprite), With<Enemy>>,
) {
    let dt = time.delta_secs();
    for (entity, mut invulnerable, mut sprite) in &mut query {
        invulnerable.timer -= dt;
        if invulnerable.timer <= 0.0 {
            sprite.color = ENEMY_COLOR;
            commands.entity(entity).remove::<Invulnerable>();
        }
    }
}
