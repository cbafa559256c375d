//! Combat domain: damage, heal, and lifecycle notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Damage intake for a character.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
    /// Points from the victim toward the damage source. `Vec2::ZERO` means
    /// the source direction is unknown.
    pub direction: Vec2,
    /// Environmental damage: no time freeze, no knockback, the target
    /// becomes invincible immediately.
    pub skip_knockback: bool,
}

impl Message for DamageEvent {}

#[derive(Debug, Clone, Copy)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: i32,
}

impl Message for HealEvent {}

/// Emitted whenever the player's health value changes, and on respawn.
#[derive(Debug, Clone, Copy)]
pub struct HealthChangedEvent {
    pub current: i32,
    pub max: i32,
}

impl Message for HealthChangedEvent {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerDiedEvent;

impl Message for PlayerDiedEvent {}

#[derive(Debug, Clone, Copy)]
pub struct PlayerRespawnedEvent;

impl Message for PlayerRespawnedEvent {}

/// Asks the combat systems to respawn the player. `None` falls back to the
/// stored respawn anchor.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRequestedEvent {
    pub position: Option<Vec2>,
}

impl Message for RespawnRequestedEvent {}
