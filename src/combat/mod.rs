mod attacks;
mod components;
mod enemies;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use attacks::AttackDirection;
pub use components::{
    AttackState, AttackZone, CombatPhase, CombatState, Enemy, Health, Invulnerable, Patrol,
};
pub use events::{
    DamageEvent, HealEvent, HealthChangedEvent, PlayerDiedEvent, PlayerRespawnedEvent,
    RespawnRequestedEvent,
};
pub use resources::{CombatTuning, EnemyTuning};

pub(crate) use enemies::spawn_enemy;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<EnemyTuning>()
            .add_message::<DamageEvent>()
            .add_message::<HealEvent>()
            .add_message::<HealthChangedEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<PlayerRespawnedEvent>()
            .add_message::<RespawnRequestedEvent>()
            .add_systems(
                Update,
                (
                    systems::recover_from_freeze,
                    systems::apply_damage,
                    systems::apply_heal,
                    systems::update_combat_timers,
                    systems::launch_attacks,
                    systems::expire_attack_zones,
                    enemies::patrol_enemies,
                    enemies::enemy_contact_damage,
                    enemies::take_attack_hits,
                    enemies::tick_enemy_iframes,
                    systems::handle_respawn_requests,
                )
                    .chain(),
            );
    }
}
