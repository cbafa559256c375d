use bevy::prelude::*;

/// A cat bed. Respawn returns the player to the nearest surviving one, and
/// a careless melee swing destroys it.
#[derive(Component, Debug)]
pub struct RestSpot;
