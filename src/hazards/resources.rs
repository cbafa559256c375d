use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    pub spike_damage: i32,
    /// Fraction of normal speed while inside a web
    pub web_slow_ratio: f32,
    /// Time an occupant charges inside a launcher before it fires, s
    pub launcher_hold_time: f32,
    pub launcher_speed: f32,
    /// Delay between a fragile tile breaking and its despawn, s
    pub fragile_break_delay: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            spike_damage: 1,
            web_slow_ratio: 0.5,
            launcher_hold_time: 0.5,
            launcher_speed: 700.0,
            fragile_break_delay: 0.35,
        }
    }
}
