//! Hazard behavior: occupancy tracking, timed launches, tile breaking, and
//! one-way platform switching.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{AttackZone, CombatState, DamageEvent};
use crate::hazards::components::{
    any_web_holds, dominant_axis, FragileTile, Launcher, LauncherKind, OneWayPlatform,
    PendingDespawn, SpiderWeb, Spikes, StruckSide,
};
use crate::hazards::resources::HazardTuning;
use crate::player::{collider_half_extents, GameLayer, MovementState, Player, PlayerInput};

/// Entering spikes hurts immediately. Knockback is skipped so the spikes do
/// not juggle the player.
pub(crate) fn spike_occupancy(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    tuning: Res<HazardTuning>,
    mut spikes: Query<&mut Spikes>,
    players: Query<&CombatState, With<Player>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok(mut spike) = spikes.get_mut(a) else {
                continue;
            };
            let Ok(combat) = players.get(b) else {
                continue;
            };
            if combat.is_dead() {
                continue;
            }
            damage_events.write(DamageEvent {
                target: b,
                amount: tuning.spike_damage,
                direction: Vec2::ZERO,
                skip_knockback: true,
            });
            spike.occupants.insert(b, true);
        }
    }
    for event in ended.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok(mut spike) = spikes.get_mut(a) else {
                continue;
            };
            spike.occupants.remove(&b);
        }
    }
}

/// Standing in spikes hurts again the moment the invincibility from the
/// previous hit runs out.
pub(crate) fn spike_stay_damage(
    tuning: Res<HazardTuning>,
    mut spikes: Query<&mut Spikes>,
    players: Query<&CombatState, With<Player>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for mut spike in &mut spikes {
        for (&occupant, was_invincible) in spike.occupants.iter_mut() {
            let Ok(combat) = players.get(occupant) else {
                continue;
            };
            if combat.is_dead() {
                continue;
            }
            let invincible = combat.is_invincible();
            if *was_invincible && !invincible {
                damage_events.write(DamageEvent {
                    target: occupant,
                    amount: tuning.spike_damage,
                    direction: Vec2::ZERO,
                    skip_knockback: true,
                });
            }
            *was_invincible = invincible;
        }
    }
}

/// Webs cap ground speed while the player is tangled in them and restore it
/// on the way out.
pub(crate) fn web_slow(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    tuning: Res<HazardTuning>,
    mut webs: Query<&mut SpiderWeb>,
    mut players: Query<&mut MovementState, With<Player>>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok(mut web) = webs.get_mut(a) else {
                continue;
            };
            let Ok(mut movement) = players.get_mut(b) else {
                continue;
            };
            web.occupant = Some(b);
            movement.set_speed_multiplier(tuning.web_slow_ratio);
        }
    }
    for event in ended.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            {
                let Ok(mut web) = webs.get_mut(a) else {
                    continue;
                };
                if web.occupant != Some(b) {
                    continue;
                }
                web.occupant = None;
            }
            // Overlapping webs: the slow stays until the last one is left
            if any_web_holds(webs.iter(), b) {
                continue;
            }
            if let Ok(mut movement) = players.get_mut(b) {
                movement.reset_speed_multiplier();
            }
        }
    }
}

pub(crate) fn launcher_occupancy(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    mut launchers: Query<&mut Launcher>,
    players: Query<(), With<Player>>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok(mut launcher) = launchers.get_mut(a) else {
                continue;
            };
            if !players.contains(b) {
                continue;
            }
            launcher.reset();
            launcher.occupant = Some(b);
        }
    }
    for event in ended.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok(mut launcher) = launchers.get_mut(a) else {
                continue;
            };
            if launcher.occupant == Some(b) {
                launcher.reset();
            }
        }
    }
}

/// Charges a held launcher and flings the occupant once it is ready. An
/// input-directed launcher without input either fires along its fallback or
/// stays armed until a direction arrives.
pub(crate) fn launcher_charge(
    time: Res<Time>,
    tuning: Res<HazardTuning>,
    input: Res<PlayerInput>,
    mut launchers: Query<&mut Launcher>,
    mut players: Query<(&mut LinearVelocity, &CombatState), With<Player>>,
) {
    let dt = time.delta_secs();
    for mut launcher in &mut launchers {
        let Some(occupant) = launcher.occupant else {
            continue;
        };
        if launcher.fired_this_stay {
            continue;
        }
        launcher.hold_timer += dt;
        if launcher.hold_timer < tuning.launcher_hold_time {
            continue;
        }

        let direction = match launcher.kind {
            LauncherKind::Fixed(dir) => dir.normalize_or_zero(),
            LauncherKind::InputDirected {
                fallback,
                fire_without_input,
            } => match dominant_axis(input.axis) {
                Some(dir) => dir,
                None if fire_without_input => fallback.normalize_or_zero(),
                None => continue,
            },
        };
        if direction == Vec2::ZERO {
            continue;
        }

        let Ok((mut velocity, combat)) = players.get_mut(occupant) else {
            continue;
        };
        if combat.is_dead() {
            continue;
        }
        velocity.0 = direction * tuning.launcher_speed;
        launcher.fired_this_stay = true;
        info!("Launcher fired along {direction}");
    }
}

/// Melee zones crack fragile tiles, but only on faces the tile exposes. A
/// broken tile loses its collider at once and crumbles away shortly after.
pub(crate) fn break_fragile_tiles(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tuning: Res<HazardTuning>,
    zones: Query<&Transform, With<AttackZone>>,
    mut tiles: Query<(Entity, &Transform, &mut FragileTile, &mut Sprite)>,
) {
    for event in started.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok((entity, tile_transform, mut tile, mut sprite)) = tiles.get_mut(a) else {
                continue;
            };
            let Ok(zone_transform) = zones.get(b) else {
                continue;
            };
            if tile.broken {
                continue;
            }
            let side = StruckSide::infer(
                tile_transform.translation.truncate(),
                zone_transform.translation.truncate(),
            );
            if !tile.allows(side) {
                continue;
            }
            tile.broken = true;
            sprite.color.set_alpha(0.5);
            commands.entity(entity).insert((
                ColliderDisabled,
                PendingDespawn {
                    timer: tuning.fragile_break_delay,
                },
            ));
            info!("Fragile tile struck from {side:?}");
        }
    }
}

pub(crate) fn despawn_broken(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut PendingDespawn)>,
) {
    let dt = time.delta_secs();
    for (entity, mut pending) in &mut query {
        pending.timer -= dt;
        if pending.timer <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// A platform lets the player through while their feet are below its top
/// edge and turns solid once they clear it. Enemies always treat it as
/// solid.
pub(crate) fn update_one_way_platforms(
    players: Query<(&Transform, &Collider), With<Player>>,
    mut platforms: Query<(&Transform, &Collider, &mut OneWayPlatform, &mut CollisionLayers)>,
) {
    let Ok((player_transform, player_collider)) = players.single() else {
        return;
    };
    let player_bottom =
        player_transform.translation.y - collider_half_extents(player_collider).y;
    for (transform, collider, mut platform, mut layers) in &mut platforms {
        let top = transform.translation.y + collider_half_extents(collider).y;
        // Slack keeps resting contact from flickering between states.
        let should_pass = player_bottom < top - 1.0;
        if platform.passable != should_pass {
            platform.passable = should_pass;
            *layers = if should_pass {
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Enemy])
            } else {
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy])
            };
        }
    }
}
