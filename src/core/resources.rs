//! Core domain: hit-freeze token and respawn anchor resources.

use bevy::prelude::*;

/// Process-wide pause token for hit-stun freeze frames.
///
/// While an owner holds the token, virtual time is paused: physics and every
/// system ticking on `Res<Time>` observe zero elapsed time. Only the owner's
/// freeze-recovery timer runs, on real time. One owner at a time; a second
/// claimant is refused and must skip its freeze.
#[derive(Resource, Debug, Default)]
pub struct HitFreeze {
    owner: Option<Entity>,
}

impl HitFreeze {
    /// Claim the freeze for `owner`. Re-claiming by the current owner is
    /// allowed; any other entity is refused while the token is held.
    pub fn try_acquire(&mut self, owner: Entity) -> bool {
        match self.owner {
            None => {
                self.owner = Some(owner);
                true
            }
            Some(current) => current == owner,
        }
    }

    /// Release the freeze. Only the owner may release; returns whether the
    /// token was actually released.
    pub fn release(&mut self, owner: Entity) -> bool {
        if self.owner == Some(owner) {
            self.owner = None;
            true
        } else {
            false
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }
}

/// Where the player returns on respawn when the request names no explicit
/// point, which happens once every rest spot has been destroyed. Starts at
/// the spawn point; resting at a bed moves it there.
#[derive(Resource, Debug)]
pub struct RespawnAnchor {
    position: Vec2,
}

impl RespawnAnchor {
    pub fn new(spawn: Vec2) -> Self {
        Self { position: spawn }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Checkpoint update from a touched rest spot.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Default for RespawnAnchor {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}
