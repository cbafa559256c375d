//! Player domain: controller components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::resources::PlayerTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms, fragile tiles)
    Ground,
    /// Climbable wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy bodies (solid, deal contact damage)
    Enemy,
    /// Sensor volumes (hazard triggers, pickups, rest spots)
    Sensor,
    /// Player melee attack zones
    PlayerAttack,
}

#[derive(Component, Debug)]
pub struct Player;

/// Capabilities granted by pickups. Never revoked within a session.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Abilities {
    pub double_jump: bool,
    pub dash: bool,
    pub wall_cling: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing toward a horizontal direction; `0.0` keeps the current facing.
    pub fn from_sign(self, x: f32) -> Facing {
        if x > 0.0 {
            Facing::Right
        } else if x < 0.0 {
            Facing::Left
        } else {
            self
        }
    }
}

/// Base phases of the jump state machine. `is_clinging` and `is_dashing`
/// overlay these; they are tracked as flags because either can interrupt any
/// phase and both suppress gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AirPhase {
    #[default]
    Grounded,
    Rising,
    Falling,
}

/// Which jump action won the priority check this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
    Wall,
}

#[derive(Component, Debug)]
pub struct MovementState {
    pub on_ground: bool,
    /// Sticks to the last contacted side while clinging, so a wall jump
    /// still knows which way to push after contact drops.
    pub on_wall: WallContact,
    pub facing: Facing,
    pub phase: AirPhase,
    /// Counts up while airborne; a jump is still accepted below the limit.
    pub coyote_timer: f32,
    /// Counts down after a jump press; consumed by the jump that uses it.
    pub jump_buffer_timer: f32,
    /// Counts up from jump start; bounds the sustained-arc window and gates
    /// wall-cling eligibility during early ascent.
    pub jump_hold_timer: f32,
    pub is_jumping: bool,
    pub is_clinging: bool,
    pub is_dashing: bool,
    pub dash_timer: f32,
    pub dash_cooldown_timer: f32,
    pub dash_direction: f32,
    /// One double jump per airborne cycle.
    pub double_jump_used: bool,
    /// One dash per airborne segment.
    pub air_dash_used: bool,
    /// Externally imposed slow factor in [0, 1]; the imposing collaborator
    /// resets it, the controller never expires it.
    pub speed_multiplier: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            on_wall: WallContact::None,
            facing: Facing::Right,
            phase: AirPhase::Grounded,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            jump_hold_timer: 0.0,
            is_jumping: false,
            is_clinging: false,
            is_dashing: false,
            dash_timer: 0.0,
            dash_cooldown_timer: 0.0,
            dash_direction: 1.0,
            double_jump_used: false,
            air_dash_used: false,
            speed_multiplier: 1.0,
        }
    }
}

impl MovementState {
    /// Clamps to [0, 1]: hazards only ever slow, never hasten.
    pub fn set_speed_multiplier(&mut self, value: f32) {
        self.speed_multiplier = value.clamp(0.0, 1.0);
    }

    pub fn reset_speed_multiplier(&mut self) {
        self.speed_multiplier = 1.0;
    }

    pub fn refill_air_charges(&mut self) {
        self.double_jump_used = false;
        self.air_dash_used = false;
    }

    /// Landing edge: back on solid ground.
    pub fn land(&mut self) {
        self.coyote_timer = 0.0;
        self.is_jumping = false;
        self.jump_hold_timer = 0.0;
        self.phase = AirPhase::Grounded;
        self.refill_air_charges();
    }

    /// Jump priority when several actions are eligible in one tick:
    /// ground jump beats double jump beats wall jump; first eligible wins.
    pub fn chosen_jump(
        &self,
        abilities: &Abilities,
        vy: f32,
        tuning: &PlayerTuning,
    ) -> Option<JumpKind> {
        if self.on_ground || self.coyote_timer < tuning.coyote_time {
            return Some(JumpKind::Ground);
        }
        if abilities.double_jump && !self.double_jump_used && !self.is_clinging && vy <= 0.0 {
            return Some(JumpKind::Double);
        }
        if self.is_clinging {
            return Some(JumpKind::Wall);
        }
        None
    }

    pub fn start_jump(&mut self, tuning: &PlayerTuning) {
        self.jump_buffer_timer = 0.0;
        // Consume coyote time so the grace window cannot be reused mid-air
        self.coyote_timer = tuning.coyote_time;
        self.jump_hold_timer = 0.0;
        self.is_jumping = true;
        self.phase = AirPhase::Rising;
    }

    pub fn start_double_jump(&mut self) {
        self.jump_buffer_timer = 0.0;
        self.double_jump_used = true;
        self.jump_hold_timer = 0.0;
        self.is_jumping = true;
        self.phase = AirPhase::Rising;
    }

    pub fn start_wall_jump(&mut self) {
        self.jump_buffer_timer = 0.0;
        self.is_clinging = false;
        self.jump_hold_timer = 0.0;
        self.is_jumping = true;
        self.phase = AirPhase::Rising;
    }

    /// Wall cling wants: the ability, live wall contact, input pressed into
    /// the wall, no upward velocity, and not the early ascent of a jump
    /// (before the minimum hold the jump keeps priority over the wall).
    pub fn cling_eligible(
        &self,
        abilities: &Abilities,
        axis_x: f32,
        vy: f32,
        tuning: &PlayerTuning,
    ) -> bool {
        if !abilities.wall_cling || self.on_ground || self.is_dashing {
            return false;
        }
        if self.is_jumping && self.jump_hold_timer < tuning.min_jump_hold {
            return false;
        }
        if vy > 0.0 {
            return false;
        }
        match self.on_wall {
            WallContact::Left => axis_x < -0.1,
            WallContact::Right => axis_x > 0.1,
            WallContact::None => false,
        }
    }

    /// Cling entry refills both air charges.
    pub fn begin_cling(&mut self) {
        self.is_clinging = true;
        self.is_jumping = false;
        self.refill_air_charges();
    }

    /// The sustained arc holds while the button stays down, the hold window
    /// is open, and the ascent has not been cut. Early release or an apex
    /// simply stops the re-pin; the arc continues ballistically.
    pub fn sustains_jump(&self, jump_held: bool, vy: f32, tuning: &PlayerTuning) -> bool {
        self.is_jumping && jump_held && self.jump_hold_timer < tuning.max_jump_hold && vy > 0.0
    }

    pub fn start_dash(&mut self, direction: f32, tuning: &PlayerTuning) {
        self.is_dashing = true;
        self.is_clinging = false;
        self.is_jumping = false;
        self.dash_timer = tuning.dash_time;
        self.dash_cooldown_timer = tuning.dash_cooldown;
        self.dash_direction = direction;
        self.air_dash_used = true;
    }

    /// Dash expiry: the air charge comes back immediately when the dash ends
    /// on the ground or against a clung wall.
    pub fn end_dash(&mut self) {
        self.is_dashing = false;
        self.dash_timer = 0.0;
        if self.on_ground || self.is_clinging {
            self.air_dash_used = false;
        }
    }

    /// While dashing the dash owns the velocity outright: fixed horizontal
    /// speed in the stored direction, vertical pinned to zero.
    pub fn dash_velocity(&self, tuning: &PlayerTuning) -> Option<Vec2> {
        self.is_dashing
            .then(|| Vec2::new(self.dash_direction * tuning.dash_speed, 0.0))
    }

    /// A dash is blocked while the single air charge is spent.
    pub fn dash_available(&self, abilities: &Abilities) -> bool {
        abilities.dash
            && !self.is_dashing
            && self.dash_cooldown_timer <= 0.0
            && !(self.air_dash_used && !self.on_ground && !self.is_clinging)
    }

    /// Gravity is off exactly while dashing, clinging, or being knocked back.
    pub fn gravity_suppressed(&self, knockback_active: bool) -> bool {
        self.is_dashing || self.is_clinging || knockback_active
    }

    /// Death clears every transient action flag.
    pub fn clear_transient(&mut self) {
        self.is_jumping = false;
        self.is_clinging = false;
        self.is_dashing = false;
        self.dash_timer = 0.0;
        self.jump_buffer_timer = 0.0;
        self.jump_hold_timer = 0.0;
    }
}
