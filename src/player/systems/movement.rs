//! Locomotion, jump, cling, dash, and gravity. These run as one chain after
//! the probes; each system owns one concern and they communicate through
//! `MovementState` and the shared `LinearVelocity`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::CombatState;
use crate::player::components::{
    Abilities, AirPhase, Facing, JumpKind, MovementState, Player, WallContact,
};
use crate::player::resources::{PlayerInput, PlayerTuning};

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let Ok(mut state) = query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    if state.on_ground {
        state.coyote_timer = 0.0;
    } else {
        state.coyote_timer += dt;
    }
    if state.jump_buffer_timer > 0.0 {
        state.jump_buffer_timer -= dt;
    }
    if state.is_jumping {
        state.jump_hold_timer += dt;
    }
    if state.dash_cooldown_timer > 0.0 {
        state.dash_cooldown_timer -= dt;
    }
    if state.is_dashing {
        state.dash_timer -= dt;
        if state.dash_timer <= 0.0 {
            state.end_dash();
        }
    }
    // Standing or clinging keeps the air charges topped up, so a ground
    // dash never strands the airborne one
    if (state.on_ground || state.is_clinging) && !state.is_dashing {
        state.refill_air_charges();
    }
}

/// Direct-drive horizontal movement. The dash and knockback own the
/// velocity while active; otherwise input maps straight to speed.
pub(crate) fn apply_locomotion(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&MovementState, &CombatState, &mut LinearVelocity), With<Player>>,
) {
    let Ok((state, combat, mut velocity)) = query.single_mut() else {
        return;
    };
    if state.is_dashing || !combat.can_act() {
        return;
    }
    velocity.x = input.axis.x * tuning.move_speed * state.speed_multiplier;
}

/// Jump state machine: buffering, the sustained arc, and the
/// ground > double > wall priority chain.
pub(crate) fn apply_jump(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (&mut MovementState, &Abilities, &CombatState, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let Ok((mut state, abilities, combat, mut velocity)) = query.single_mut() else {
        return;
    };

    if !combat.can_act() {
        // Presses made during hit-stun or death never fire later
        state.jump_buffer_timer = 0.0;
        return;
    }

    if input.jump_pressed {
        state.jump_buffer_timer = tuning.jump_buffer_time;
    }

    if state.is_dashing {
        return;
    }

    // Apex, ceiling hit, or an external velocity write ends the ascent
    if state.is_jumping && velocity.y <= 0.0 {
        state.is_jumping = false;
    }

    // Sustained arc: holding the button re-pins launch speed each tick
    if state.sustains_jump(input.jump_held, velocity.y, &tuning) {
        velocity.y = tuning.jump_speed;
    }

    if state.jump_buffer_timer <= 0.0 {
        return;
    }

    match state.chosen_jump(abilities, velocity.y, &tuning) {
        Some(JumpKind::Ground) => {
            state.start_jump(&tuning);
            velocity.y = tuning.jump_speed;
        }
        Some(JumpKind::Double) => {
            state.start_double_jump();
            velocity.y = tuning.jump_speed;
        }
        Some(JumpKind::Wall) => {
            let away = match state.on_wall {
                WallContact::Left => 1.0,
                WallContact::Right => -1.0,
                WallContact::None => -state.facing.sign(),
            };
            state.start_wall_jump();
            velocity.x = away * tuning.wall_jump_horizontal;
            velocity.y = tuning.wall_jump_vertical;
            state.facing = state.facing.from_sign(away);
        }
        None => {}
    }
}

/// Wall cling: engage when eligible, hold vertical velocity at zero while
/// the input stays pressed into the remembered side, drop otherwise.
pub(crate) fn apply_wall_cling(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (&mut MovementState, &Abilities, &CombatState, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let Ok((mut state, abilities, combat, mut velocity)) = query.single_mut() else {
        return;
    };

    if !combat.can_act() {
        state.is_clinging = false;
        return;
    }

    if state.is_clinging {
        let holding = match state.on_wall {
            WallContact::Left => input.axis.x < -0.1,
            WallContact::Right => input.axis.x > 0.1,
            WallContact::None => false,
        };
        if holding && !state.on_ground && !state.is_dashing {
            velocity.y = 0.0;
        } else {
            state.is_clinging = false;
        }
    } else if state.cling_eligible(abilities, input.axis.x, velocity.y, &tuning) {
        state.begin_cling();
        velocity.y = 0.0;
    }
}

pub(crate) fn apply_dash(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (&mut MovementState, &Abilities, &CombatState, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let Ok((mut state, abilities, combat, mut velocity)) = query.single_mut() else {
        return;
    };

    if !combat.can_act() {
        return;
    }

    if input.dash_pressed && state.dash_available(abilities) {
        let direction = if input.axis.x.abs() > 0.1 {
            input.axis.x.signum()
        } else {
            state.facing.sign()
        };
        state.start_dash(direction, &tuning);
    }

    if let Some(pinned) = state.dash_velocity(&tuning) {
        velocity.0 = pinned;
    }
}

/// Manual gravity with a terminal fall speed. The player body carries
/// `GravityScale(0.0)`; dashing, clinging, and knockback turn gravity off
/// entirely rather than fighting it.
pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&MovementState, &CombatState, &mut LinearVelocity), With<Player>>,
) {
    let Ok((state, combat, mut velocity)) = query.single_mut() else {
        return;
    };
    if state.gravity_suppressed(combat.in_knockback()) {
        return;
    }
    velocity.y -= tuning.gravity * time.delta_secs();
    if velocity.y < -tuning.max_fall_speed {
        velocity.y = -tuning.max_fall_speed;
    }
}

pub(crate) fn sync_air_phase(
    mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>,
) {
    let Ok((mut state, velocity)) = query.single_mut() else {
        return;
    };
    state.phase = if state.on_ground {
        AirPhase::Grounded
    } else if velocity.y > 0.0 {
        AirPhase::Rising
    } else {
        AirPhase::Falling
    };
}

/// Facing follows the input sign, not the velocity, so a wall-blocked
/// character still turns toward its input.
pub(crate) fn update_facing(
    input: Res<PlayerInput>,
    mut query: Query<(&mut MovementState, &CombatState, &mut Sprite), With<Player>>,
) {
    let Ok((mut state, combat, mut sprite)) = query.single_mut() else {
        return;
    };
    if combat.can_act() && !state.is_dashing {
        state.facing = state.facing.from_sign(input.axis.x);
    }
    sprite.flip_x = state.facing == Facing::Left;
}
