//! Combat domain: the damage pipeline, hit freeze, knockback, death, and
//! respawn for the player character.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::attacks::AttackDirection;
use crate::combat::components::{AttackState, AttackZone, CombatPhase, CombatState, Health};
use crate::combat::events::{
    DamageEvent, HealEvent, HealthChangedEvent, PlayerDiedEvent, PlayerRespawnedEvent,
    RespawnRequestedEvent,
};
use crate::combat::resources::CombatTuning;
use crate::core::{HitFreeze, RespawnAnchor};
use crate::player::{GameLayer, MovementState, Player, PlayerInput};

/// Processes damage aimed at the player. A knockback hit freezes simulated
/// time and parks the state machine in `FrozenHit`; environmental damage
/// goes straight to invincibility. Lethal damage runs the death path.
pub(crate) fn apply_damage(
    mut events: MessageReader<DamageEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut death_events: MessageWriter<PlayerDiedEvent>,
    mut freeze: ResMut<HitFreeze>,
    mut virtual_time: ResMut<Time<Virtual>>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (
            Entity,
            &mut Health,
            &mut CombatState,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let Ok((entity, mut health, mut state, mut movement, mut velocity)) = query.single_mut()
    else {
        return;
    };

    for event in events.read() {
        if event.target != entity || !state.accepts_damage() {
            continue;
        }

        health.damage(event.amount);
        health_events.write(HealthChangedEvent {
            current: health.current,
            max: health.max,
        });

        if health.is_depleted() {
            if state.die() {
                velocity.0 = Vec2::ZERO;
                movement.clear_transient();
                info!("Player died");
                death_events.write(PlayerDiedEvent);
            }
            continue;
        }

        if event.skip_knockback {
            state.begin_invincibility(&tuning);
            continue;
        }

        // A knockback hit cancels whatever action was in flight
        movement.clear_transient();
        state.begin_frozen_hit(event.direction, movement.facing.sign(), &tuning);
        if freeze.try_acquire(entity) {
            virtual_time.pause();
        } else {
            // Freeze owned elsewhere: skip the freeze frame, knock back now
            movement.facing = movement.facing.from_sign(event.direction.x);
            velocity.0 = state.knockback_velocity;
            state.begin_knockback(&tuning);
        }
    }
}

/// Counts the freeze down on the real clock, since simulated time is paused.
/// On expiry: release the freeze, face the attacker, and launch away.
pub(crate) fn recover_from_freeze(
    real_time: Res<Time<Real>>,
    mut freeze: ResMut<HitFreeze>,
    mut virtual_time: ResMut<Time<Virtual>>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (Entity, &mut CombatState, &mut MovementState, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let Ok((entity, mut state, mut movement, mut velocity)) = query.single_mut() else {
        return;
    };
    if state.phase != CombatPhase::FrozenHit {
        return;
    }

    state.phase_timer -= real_time.delta_secs();
    if state.phase_timer > 0.0 {
        return;
    }

    if freeze.release(entity) {
        virtual_time.unpause();
    }
    movement.facing = movement.facing.from_sign(state.hit_direction.x);
    velocity.0 = state.knockback_velocity;
    state.begin_knockback(&tuning);
}

/// Knockback velocity re-pin, invincibility countdown, opacity flicker,
/// and the attack cooldown, all on simulated time.
pub(crate) fn update_combat_timers(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (&mut CombatState, &mut AttackState, &mut LinearVelocity, &mut Sprite),
        With<Player>,
    >,
) {
    let Ok((mut state, mut attack, mut velocity, mut sprite)) = query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    if attack.cooldown_timer > 0.0 {
        attack.cooldown_timer -= dt;
    }

    match state.phase {
        CombatPhase::Knockback => {
            // Input cannot steer a knockback; the vector wins every tick
            velocity.0 = state.knockback_velocity;
            state.phase_timer -= dt;
            if state.phase_timer <= 0.0 {
                state.begin_invincibility(&tuning);
            }
        }
        CombatPhase::Invincible => {
            state.phase_timer -= dt;
            state.flicker_timer -= dt;
            if state.flicker_timer <= 0.0 {
                state.flicker_dim = !state.flicker_dim;
                state.flicker_timer = tuning.flicker_interval;
            }
            sprite
                .color
                .set_alpha(if state.flicker_dim { 0.5 } else { 1.0 });
            if state.phase_timer <= 0.0 {
                state.recover();
                sprite.color.set_alpha(1.0);
            }
        }
        _ => {}
    }
}

pub(crate) fn apply_heal(
    mut events: MessageReader<HealEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut query: Query<(Entity, &mut Health, &CombatState), With<Player>>,
) {
    let Ok((entity, mut health, state)) = query.single_mut() else {
        return;
    };
    for event in events.read() {
        if event.target != entity || state.is_dead() {
            continue;
        }
        health.heal(event.amount);
        health_events.write(HealthChangedEvent {
            current: health.current,
            max: health.max,
        });
    }
}

/// Spawns a short-lived melee zone in the aimed direction.
pub(crate) fn launch_attacks(
    mut commands: Commands,
    input: Res<PlayerInput>,
    tuning: Res<CombatTuning>,
    mut query: Query<(&Transform, &MovementState, &CombatState, &mut AttackState), With<Player>>,
) {
    let Ok((transform, movement, combat, mut attack)) = query.single_mut() else {
        return;
    };
    if !input.attack_pressed || !combat.can_act() || attack.cooldown_timer > 0.0 {
        return;
    }
    attack.cooldown_timer = tuning.attack_cooldown;

    let direction = AttackDirection::from_input(input.axis, movement.facing);
    let size = direction.zone_size(tuning.attack_zone_length, tuning.attack_zone_width);
    let position =
        transform.translation.truncate() + direction.to_offset(tuning.attack_zone_reach);

    commands.spawn((
        AttackZone {
            damage: tuning.attack_damage,
            direction,
            lifetime: tuning.attack_zone_lifetime,
            hit_entities: Vec::new(),
        },
        Sprite {
            color: Color::srgba(0.95, 0.9, 0.7, 0.35),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(9.0)),
        (
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::PlayerAttack,
                [GameLayer::Enemy, GameLayer::Ground, GameLayer::Sensor],
            ),
        ),
    ));
}

pub(crate) fn expire_attack_zones(
    time: Res<Time>,
    mut commands: Commands,
    mut zones: Query<(Entity, &mut AttackZone)>,
) {
    let dt = time.delta_secs();
    for (entity, mut zone) in &mut zones {
        zone.lifetime -= dt;
        if zone.lifetime <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Respawns the player at the requested point, or the stored anchor when
/// the request carries none. Valid from any phase; a respawn always stands
/// the character back up.
pub(crate) fn handle_respawn_requests(
    mut events: MessageReader<RespawnRequestedEvent>,
    mut respawned_events: MessageWriter<PlayerRespawnedEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut freeze: ResMut<HitFreeze>,
    mut virtual_time: ResMut<Time<Virtual>>,
    anchor: Res<RespawnAnchor>,
    mut query: Query<
        (
            Entity,
            &mut Health,
            &mut CombatState,
            &mut MovementState,
            &mut Transform,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let Ok((entity, mut health, mut state, mut movement, mut transform, mut velocity, mut sprite)) =
        query.single_mut()
    else {
        return;
    };
    // Several same-frame requests collapse into one respawn
    let Some(event) = events.read().last() else {
        return;
    };

    if freeze.release(entity) {
        virtual_time.unpause();
    }

    let position = event.position.unwrap_or_else(|| anchor.position());
    transform.translation = position.extend(transform.translation.z);
    velocity.0 = Vec2::ZERO;

    health.restore_full();
    health_events.write(HealthChangedEvent {
        current: health.current,
        max: health.max,
    });

    state.revive();
    movement.clear_transient();
    movement.refill_air_charges();
    sprite.color.set_alpha(1.0);

    info!("Player respawned at {:?}", position);
    respawned_events.write(PlayerRespawnedEvent);
}
