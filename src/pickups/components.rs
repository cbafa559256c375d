use bevy::prelude::*;

use crate::player::Abilities;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupKind {
    /// Restores some health on the spot.
    Heal(i32),
    Dash,
    DoubleJump,
    WallCling,
}

impl PickupKind {
    /// Ability kinds flip exactly their unlock; heal kinds leave abilities
    /// alone and hand back the amount for the heal pipeline.
    pub fn grant(self, abilities: &mut Abilities) -> Option<i32> {
        match self {
            PickupKind::Heal(amount) => Some(amount),
            PickupKind::Dash => {
                abilities.dash = true;
                None
            }
            PickupKind::DoubleJump => {
                abilities.double_jump = true;
                None
            }
            PickupKind::WallCling => {
                abilities.wall_cling = true;
                None
            }
        }
    }
}

/// A collectible prop. Touching it consumes it.
#[derive(Component, Debug)]
pub struct Pickup {
    pub kind: PickupKind,
}

/// Gentle vertical bob around the spawn height.
#[derive(Component, Debug)]
pub struct BobMotion {
    pub anchor_y: f32,
    pub phase: f32,
}
