use bevy::prelude::*;
use serde::Deserialize;

/// Combat numbers for the player character.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub max_health: i32,
    /// Global time-freeze length on a knockback hit, in real seconds
    pub hit_freeze_time: f32,
    pub knockback_time: f32,
    pub knockback_speed_x: f32,
    pub knockback_speed_y: f32,
    pub invincibility_time: f32,
    /// Opacity flicker half-period during invincibility
    pub flicker_interval: f32,
    pub attack_damage: i32,
    pub attack_cooldown: f32,
    pub attack_zone_lifetime: f32,
    /// Distance from the attacker's center to the zone center, px
    pub attack_zone_reach: f32,
    /// Zone extent along the swing direction, px
    pub attack_zone_length: f32,
    /// Zone extent across the swing direction, px
    pub attack_zone_width: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 5,
            hit_freeze_time: 0.18,
            knockback_time: 0.22,
            knockback_speed_x: 380.0,
            knockback_speed_y: 420.0,
            invincibility_time: 1.5,
            flicker_interval: 0.1,
            attack_damage: 1,
            attack_cooldown: 0.35,
            attack_zone_lifetime: 0.15,
            attack_zone_reach: 26.0,
            attack_zone_length: 34.0,
            attack_zone_width: 24.0,
        }
    }
}

/// Combat and patrol numbers for enemies.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub move_speed: f32,
    pub max_health: i32,
    pub contact_damage: i32,
    /// Post-hit immunity window, s
    pub hit_iframes: f32,
    pub knockback_speed_x: f32,
    pub knockback_speed_y: f32,
    /// Patrol reach on each side when no bounds are configured, px
    pub default_patrol_half_range: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            move_speed: 120.0,
            max_health: 3,
            contact_damage: 1,
            hit_iframes: 0.25,
            knockback_speed_x: 260.0,
            knockback_speed_y: 240.0,
            default_patrol_half_range: 64.0,
        }
    }
}
