//! Combat domain: health, the damage state machine, and attack state.

use bevy::prelude::*;

use crate::combat::attacks::AttackDirection;
use crate::combat::resources::CombatTuning;

/// Health for damageable entities. Whole hearts, never outside `[0, max]`.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    /// Applies damage clamped at zero health; negative amounts are treated
    /// as zero. Returns the amount actually removed.
    pub fn damage(&mut self, amount: i32) -> i32 {
        let actual = amount.max(0).min(self.current);
        self.current -= actual;
        actual
    }

    /// Heals up to `max`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.max(0).min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn restore_full(&mut self) {
        self.current = self.max;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Damage-intake state machine. A hit runs `Alive -> FrozenHit -> Knockback
/// -> Invincible -> Alive`; environmental damage skips straight from `Alive`
/// to `Invincible`. `Dead` is reachable from any live phase and leaves only
/// via respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombatPhase {
    #[default]
    Alive,
    /// Global time frozen to sell the hit; recovery runs on real time.
    FrozenHit,
    Knockback,
    Invincible,
    Dead,
}

#[derive(Component, Debug, Default)]
pub struct CombatState {
    pub phase: CombatPhase,
    /// Remaining time in the current phase.
    pub phase_timer: f32,
    /// Velocity re-pinned every tick while in `Knockback`.
    pub knockback_velocity: Vec2,
    /// Direction of the last hit, pointing from the victim toward the source.
    pub hit_direction: Vec2,
    pub flicker_timer: f32,
    pub flicker_dim: bool,
}

impl CombatState {
    /// Normal input-driven actions are allowed. Invincibility does not
    /// restrict movement; it only rejects damage.
    pub fn can_act(&self) -> bool {
        matches!(self.phase, CombatPhase::Alive | CombatPhase::Invincible)
    }

    /// Damage is rejected in every post-hit phase, not just `Invincible`.
    pub fn is_invincible(&self) -> bool {
        matches!(
            self.phase,
            CombatPhase::FrozenHit | CombatPhase::Knockback | CombatPhase::Invincible
        )
    }

    pub fn is_dead(&self) -> bool {
        self.phase == CombatPhase::Dead
    }

    pub fn in_knockback(&self) -> bool {
        self.phase == CombatPhase::Knockback
    }

    pub fn accepts_damage(&self) -> bool {
        self.phase == CombatPhase::Alive
    }

    /// Knockback pushes away from the source horizontally and always up.
    /// A purely vertical hit falls back to pushing opposite the current
    /// facing.
    pub fn knockback_for(direction: Vec2, facing_sign: f32, tuning: &CombatTuning) -> Vec2 {
        let x = if direction.x > 0.0 {
            -tuning.knockback_speed_x
        } else if direction.x < 0.0 {
            tuning.knockback_speed_x
        } else {
            -facing_sign * tuning.knockback_speed_x
        };
        Vec2::new(x, tuning.knockback_speed_y)
    }

    pub fn begin_frozen_hit(&mut self, direction: Vec2, facing_sign: f32, tuning: &CombatTuning) {
        self.phase = CombatPhase::FrozenHit;
        self.phase_timer = tuning.hit_freeze_time;
        self.hit_direction = direction;
        self.knockback_velocity = Self::knockback_for(direction, facing_sign, tuning);
    }

    pub fn begin_knockback(&mut self, tuning: &CombatTuning) {
        self.phase = CombatPhase::Knockback;
        self.phase_timer = tuning.knockback_time;
    }

    pub fn begin_invincibility(&mut self, tuning: &CombatTuning) {
        self.phase = CombatPhase::Invincible;
        self.phase_timer = tuning.invincibility_time;
        self.flicker_timer = tuning.flicker_interval;
        self.flicker_dim = false;
    }

    pub fn recover(&mut self) {
        self.phase = CombatPhase::Alive;
        self.phase_timer = 0.0;
        self.flicker_dim = false;
    }

    /// Idempotent death transition. Returns whether the transition actually
    /// happened, so the caller fires the death notification exactly once.
    pub fn die(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        self.phase = CombatPhase::Dead;
        self.phase_timer = 0.0;
        self.flicker_dim = false;
        self.knockback_velocity = Vec2::ZERO;
        true
    }

    /// Respawn path back to `Alive`; valid from any phase.
    pub fn revive(&mut self) {
        self.phase = CombatPhase::Alive;
        self.phase_timer = 0.0;
        self.flicker_timer = 0.0;
        self.flicker_dim = false;
        self.knockback_velocity = Vec2::ZERO;
        self.hit_direction = Vec2::ZERO;
    }
}

/// Melee attack cooldown.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    pub cooldown_timer: f32,
}

/// Short-lived melee hit volume spawned in front of the attacker.
#[derive(Component, Debug)]
pub struct AttackZone {
    pub damage: i32,
    pub direction: AttackDirection,
    pub lifetime: f32,
    /// Entities already struck by this zone; each target is hit at most once.
    pub hit_entities: Vec<Entity>,
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Horizontal patrol between two x bounds.
#[derive(Component, Debug)]
pub struct Patrol {
    pub left_x: f32,
    pub right_x: f32,
    pub moving_right: bool,
}

impl Patrol {
    /// Inverted bounds are swapped rather than rejected.
    pub fn new(left_x: f32, right_x: f32) -> Self {
        let (left_x, right_x) = if left_x <= right_x {
            (left_x, right_x)
        } else {
            (right_x, left_x)
        };
        Self {
            left_x,
            right_x,
            moving_right: true,
        }
    }

    pub fn direction(&self) -> f32 {
        if self.moving_right { 1.0 } else { -1.0 }
    }

    /// Flips the direction when the current position has reached a bound.
    pub fn advance(&mut self, x: f32) {
        if self.moving_right && x >= self.right_x {
            self.moving_right = false;
        } else if !self.moving_right && x <= self.left_x {
            self.moving_right = true;
        }
    }
}

/// Brief post-hit immunity for enemies, with a hurt flash.
#[derive(Component, Debug)]
pub struct Invulnerable {
    pub timer: f32,
}
