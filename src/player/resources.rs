use bevy::prelude::*;
use serde::Deserialize;

/// Tunable movement numbers. Loaded from `assets/data/tuning.ron` at startup;
/// these defaults apply when the file is missing or partial.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal run speed, px/s
    pub move_speed: f32,
    /// Initial and sustained jump velocity, px/s
    pub jump_speed: f32,
    /// Manual gravity applied to the player, px/s^2
    pub gravity: f32,
    /// Terminal fall speed, px/s
    pub max_fall_speed: f32,
    /// Grace window after walking off a ledge, s
    pub coyote_time: f32,
    /// How long an early jump press stays valid, s
    pub jump_buffer_time: f32,
    /// Below this hold time the jump still owns the ascent (no cling), s
    pub min_jump_hold: f32,
    /// Longest sustained-arc window, s
    pub max_jump_hold: f32,
    /// Dash speed, px/s
    pub dash_speed: f32,
    /// Dash duration, s
    pub dash_time: f32,
    /// Cooldown between dashes, s
    pub dash_cooldown: f32,
    /// Wall jump horizontal push, px/s
    pub wall_jump_horizontal: f32,
    /// Wall jump vertical push, px/s
    pub wall_jump_vertical: f32,
    /// Max gap between collider edge and wall that still counts as contact, px
    pub cling_distance: f32,
    /// Ground probe reach below the feet, px
    pub ground_probe_depth: f32,
    /// Ceiling probe reach above the head, px
    pub ceiling_probe_distance: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 280.0,
            jump_speed: 620.0,
            gravity: 1700.0,
            max_fall_speed: 900.0,
            coyote_time: 0.12,
            jump_buffer_time: 0.12,
            min_jump_hold: 0.08,
            max_jump_hold: 0.22,
            dash_speed: 820.0,
            dash_time: 0.18,
            dash_cooldown: 0.45,
            wall_jump_horizontal: 460.0,
            wall_jump_vertical: 620.0,
            cling_distance: 6.0,
            ground_probe_depth: 6.0,
            ceiling_probe_distance: 8.0,
        }
    }
}

/// Per-tick input snapshot. Gameplay systems read this instead of the raw
/// keyboard, so tests and debug tools can drive the controller directly.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlayerInput {
    /// Digital move axis, each component in {-1, 0, 1}
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
    pub attack_pressed: bool,
}
