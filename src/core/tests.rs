//! Core domain: unit tests for the hit-freeze token and respawn anchor.

use bevy::math::Vec2;
use bevy::prelude::Entity;

use super::{HitFreeze, RespawnAnchor};

#[test]
fn test_freeze_single_owner() {
    let mut freeze = HitFreeze::default();
    let first = Entity::from_bits(42);
    let second = Entity::from_bits(43);

    assert!(!freeze.is_frozen());
    assert!(freeze.try_acquire(first));
    assert!(freeze.is_frozen());
    assert_eq!(freeze.owner(), Some(first));

    // A second claimant is refused while the token is held
    assert!(!freeze.try_acquire(second));
    assert_eq!(freeze.owner(), Some(first));

    // Re-claiming by the holder is allowed
    assert!(freeze.try_acquire(first));
}

#[test]
fn test_freeze_release_requires_owner() {
    let mut freeze = HitFreeze::default();
    let owner = Entity::from_bits(42);
    let other = Entity::from_bits(43);

    assert!(freeze.try_acquire(owner));

    // Non-owner release is a no-op
    assert!(!freeze.release(other));
    assert!(freeze.is_frozen());

    assert!(freeze.release(owner));
    assert!(!freeze.is_frozen());

    // Double release is a no-op
    assert!(!freeze.release(owner));
}

#[test]
fn test_freeze_reusable_after_release() {
    let mut freeze = HitFreeze::default();
    let first = Entity::from_bits(42);
    let second = Entity::from_bits(43);

    assert!(freeze.try_acquire(first));
    assert!(freeze.release(first));
    assert!(freeze.try_acquire(second));
    assert_eq!(freeze.owner(), Some(second));
}

#[test]
fn test_respawn_anchor_holds_spawn() {
    let anchor = RespawnAnchor::new(Vec2::new(-200.0, -80.0));
    assert_eq!(anchor.position(), Vec2::new(-200.0, -80.0));
    assert_eq!(RespawnAnchor::default().position(), Vec2::ZERO);
}

#[test]
fn test_respawn_anchor_checkpoint_moves_it() {
    let mut anchor = RespawnAnchor::new(Vec2::new(-200.0, -80.0));
    anchor.set_position(Vec2::new(80.0, 98.0));
    assert_eq!(anchor.position(), Vec2::new(80.0, 98.0));
}
