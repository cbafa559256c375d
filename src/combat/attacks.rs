//! Combat domain: melee attack direction and zone geometry.

use bevy::prelude::*;

use crate::player::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackDirection {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl AttackDirection {
    /// Vertical input wins over facing, so an upward or downward swipe can
    /// be aimed without turning.
    pub fn from_input(axis: Vec2, facing: Facing) -> Self {
        if axis.y > 0.5 {
            AttackDirection::Up
        } else if axis.y < -0.5 {
            AttackDirection::Down
        } else {
            match facing {
                Facing::Left => AttackDirection::Left,
                Facing::Right => AttackDirection::Right,
            }
        }
    }

    /// Offset vector for zone placement
    pub fn to_offset(self, distance: f32) -> Vec2 {
        match self {
            AttackDirection::Up => Vec2::new(0.0, distance),
            AttackDirection::Down => Vec2::new(0.0, -distance),
            AttackDirection::Left => Vec2::new(-distance, 0.0),
            AttackDirection::Right => Vec2::new(distance, 0.0),
        }
    }

    /// Zone dimensions (width, height) - elongated in the attack direction
    pub fn zone_size(self, length: f32, width: f32) -> Vec2 {
        match self {
            AttackDirection::Up | AttackDirection::Down => Vec2::new(width, length),
            AttackDirection::Left | AttackDirection::Right => Vec2::new(length, width),
        }
    }

    /// Horizontal sign of the swing, zero for vertical attacks.
    pub fn horizontal_sign(self) -> f32 {
        match self {
            AttackDirection::Left => -1.0,
            AttackDirection::Right => 1.0,
            AttackDirection::Up | AttackDirection::Down => 0.0,
        }
    }
}
