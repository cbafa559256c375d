//! Debug domain: hotkeys and runtime cheats.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{
    CombatState, CombatTuning, DamageEvent, HealEvent, Health, HealthChangedEvent,
    RespawnRequestedEvent,
};
use crate::debug::state::DebugState;
use crate::debug::ui::{spawn_debug_info_overlay, DebugInfoOverlay};
use crate::player::{Abilities, MovementState, Player};

/// Debug hotkeys. F1 or backtick toggles the overlay; everything else is
/// Ctrl-gated so normal play cannot trip a cheat.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<CombatTuning>,
    mut debug_state: ResMut<DebugState>,
    mut players: Query<(Entity, &mut Abilities), With<Player>>,
    mut heal_events: MessageWriter<HealEvent>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut respawn_events: MessageWriter<RespawnRequestedEvent>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        let msg = if debug_state.show_info {
            "Info overlay ON"
        } else {
            "Info overlay OFF"
        };
        info!("[DEBUG] {}", msg);
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let Ok((player_entity, mut abilities)) = players.single_mut() else {
        return;
    };

    // Ctrl+I: toggle damage-proofing
    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.damage_proof = !debug_state.damage_proof;
        let msg = if debug_state.damage_proof {
            "Damage-proof ON"
        } else {
            "Damage-proof OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    // Ctrl+G: grant every ability
    if keyboard.just_pressed(KeyCode::KeyG) {
        *abilities = Abilities {
            double_jump: true,
            dash: true,
            wall_cling: true,
        };
        debug_state.set_message("All abilities granted", 2.0);
        info!("[DEBUG] All abilities granted");
    }

    // Ctrl+H: full heal through the regular pipeline
    if keyboard.just_pressed(KeyCode::KeyH) {
        heal_events.write(HealEvent {
            target: player_entity,
            amount: tuning.max_health,
        });
        debug_state.set_message("Full heal", 2.0);
        info!("[DEBUG] Full heal");
    }

    // Ctrl+K: take a test hit from the right
    if keyboard.just_pressed(KeyCode::KeyK) {
        damage_events.write(DamageEvent {
            target: player_entity,
            amount: 1,
            direction: Vec2::X,
            skip_knockback: false,
        });
        debug_state.set_message("Self damage", 2.0);
        info!("[DEBUG] Self damage");
    }

    // Ctrl+R: respawn at the anchor
    if keyboard.just_pressed(KeyCode::KeyR) {
        respawn_events.write(RespawnRequestedEvent { position: None });
        debug_state.set_message("Respawn", 2.0);
        info!("[DEBUG] Respawn requested");
    }
}

/// While damage-proof, health snaps back to full. Hits still flinch the
/// player, but nothing sticks.
pub(crate) fn apply_damage_proof(
    debug_state: Res<DebugState>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut players: Query<&mut Health, With<Player>>,
) {
    if !debug_state.damage_proof {
        return;
    }
    for mut health in &mut players {
        if health.current < health.max {
            health.restore_full();
            health_events.write(HealthChangedEvent {
                current: health.current,
                max: health.max,
            });
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    players: Query<
        (
            &Transform,
            &LinearVelocity,
            &Health,
            &CombatState,
            &MovementState,
            &Abilities,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, velocity, health, combat, movement, abilities)), Ok(mut text)) =
        (players.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let mut lines = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nHP: {}/{}\nPhase: {:?}\nGround: {}  Wall: {:?}\nDJ: {}  Dash: {}  Cling: {}\nDamage-proof: {}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            health.current,
            health.max,
            combat.phase,
            movement.on_ground,
            movement.on_wall,
            abilities.double_jump,
            abilities.dash,
            abilities.wall_cling,
            debug_state.damage_proof
        );
        if let Some((message, _)) = &debug_state.status_message {
            lines.push_str("\n\n");
            lines.push_str(message);
        }
        **text = lines;
    }
}
