use bevy::prelude::*;

use super::attacks::AttackDirection;
use super::components::{CombatPhase, CombatState, Health, Patrol};
use super::resources::CombatTuning;
use crate::player::Facing;

#[test]
fn test_health_stays_in_bounds() {
    let mut health = Health::new(5);
    health.damage(2);
    health.heal(10);
    assert_eq!(health.current, 5);

    health.damage(100);
    assert_eq!(health.current, 0);
    assert!(health.is_depleted());

    health.heal(3);
    assert_eq!(health.current, 3);
    assert!(health.current >= 0 && health.current <= health.max);
}

#[test]
fn test_health_rejects_negative_amounts() {
    let mut health = Health::new(5);
    assert_eq!(health.damage(-3), 0);
    assert_eq!(health.current, 5);
    health.damage(2);
    assert_eq!(health.heal(-3), 0);
    assert_eq!(health.current, 3);
}

#[test]
fn test_health_damage_reports_applied_amount() {
    let mut health = Health::new(5);
    assert_eq!(health.damage(2), 2);
    assert_eq!(health.damage(10), 3);
    assert_eq!(health.damage(1), 0);
}

#[test]
fn test_health_fraction() {
    let mut health = Health::new(5);
    assert_eq!(health.fraction(), 1.0);
    health.damage(2);
    assert!((health.fraction() - 0.6).abs() < f32::EPSILON);
}

#[test]
fn test_damage_accepted_only_while_alive() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::default();
    assert!(state.accepts_damage());

    state.begin_frozen_hit(Vec2::X, 1.0, &tuning);
    assert!(!state.accepts_damage());
    assert!(state.is_invincible());

    state.begin_knockback(&tuning);
    assert!(!state.accepts_damage());

    state.begin_invincibility(&tuning);
    assert!(!state.accepts_damage());
    assert!(state.is_invincible());

    state.recover();
    assert!(state.accepts_damage());

    state.die();
    assert!(!state.accepts_damage());
}

#[test]
fn test_can_act_per_phase() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::default();
    assert!(state.can_act());

    state.begin_frozen_hit(Vec2::X, 1.0, &tuning);
    assert!(!state.can_act());

    state.begin_knockback(&tuning);
    assert!(!state.can_act());

    // Invincibility never restricts movement
    state.begin_invincibility(&tuning);
    assert!(state.can_act());

    state.die();
    assert!(!state.can_act());
}

#[test]
fn test_death_is_idempotent() {
    let mut state = CombatState::default();
    assert!(state.die());
    let phase_after_first = state.phase;

    assert!(!state.die());
    assert_eq!(state.phase, phase_after_first);
    assert_eq!(state.phase, CombatPhase::Dead);
}

#[test]
fn test_revive_restores_alive_state() {
    let mut state = CombatState::default();
    state.die();
    assert!(state.is_dead());

    state.revive();
    assert!(!state.is_dead());
    assert!(state.can_act());
    assert_eq!(state.phase, CombatPhase::Alive);
    assert_eq!(state.knockback_velocity, Vec2::ZERO);
}

#[test]
fn test_knockback_pushes_away_from_source() {
    let tuning = CombatTuning::default();

    // Source to the right: pushed left and up
    let v = CombatState::knockback_for(Vec2::new(1.0, 0.0), 1.0, &tuning);
    assert_eq!(v.x, -tuning.knockback_speed_x);
    assert_eq!(v.y, tuning.knockback_speed_y);

    // Source to the left: pushed right
    let v = CombatState::knockback_for(Vec2::new(-3.0, 0.5), 1.0, &tuning);
    assert_eq!(v.x, tuning.knockback_speed_x);
}

#[test]
fn test_vertical_hit_falls_back_to_facing() {
    let tuning = CombatTuning::default();

    let v = CombatState::knockback_for(Vec2::new(0.0, 1.0), 1.0, &tuning);
    assert_eq!(v.x, -tuning.knockback_speed_x);

    let v = CombatState::knockback_for(Vec2::new(0.0, -1.0), -1.0, &tuning);
    assert_eq!(v.x, tuning.knockback_speed_x);
}

#[test]
fn test_hit_pipeline_phase_order() {
    let tuning = CombatTuning::default();
    let mut state = CombatState::default();

    state.begin_frozen_hit(Vec2::new(2.0, 0.0), 1.0, &tuning);
    assert_eq!(state.phase, CombatPhase::FrozenHit);
    assert_eq!(state.phase_timer, tuning.hit_freeze_time);
    assert_eq!(state.knockback_velocity.x, -tuning.knockback_speed_x);

    state.begin_knockback(&tuning);
    assert_eq!(state.phase, CombatPhase::Knockback);
    assert!(state.in_knockback());

    state.begin_invincibility(&tuning);
    assert_eq!(state.phase, CombatPhase::Invincible);

    state.recover();
    assert_eq!(state.phase, CombatPhase::Alive);
}

#[test]
fn test_patrol_flips_at_bounds() {
    let mut patrol = Patrol::new(0.0, 100.0);
    assert_eq!(patrol.direction(), 1.0);

    patrol.advance(50.0);
    assert_eq!(patrol.direction(), 1.0);

    patrol.advance(100.0);
    assert_eq!(patrol.direction(), -1.0);

    patrol.advance(-2.0);
    assert_eq!(patrol.direction(), 1.0);
}

#[test]
fn test_patrol_swaps_inverted_bounds() {
    let patrol = Patrol::new(100.0, 0.0);
    assert_eq!(patrol.left_x, 0.0);
    assert_eq!(patrol.right_x, 100.0);
}

#[test]
fn test_attack_direction_from_input() {
    assert_eq!(
        AttackDirection::from_input(Vec2::new(0.0, 1.0), Facing::Right),
        AttackDirection::Up
    );
    assert_eq!(
        AttackDirection::from_input(Vec2::new(0.0, -1.0), Facing::Right),
        AttackDirection::Down
    );
    assert_eq!(
        AttackDirection::from_input(Vec2::ZERO, Facing::Left),
        AttackDirection::Left
    );
    assert_eq!(
        AttackDirection::from_input(Vec2::new(1.0, 0.0), Facing::Right),
        AttackDirection::Right
    );
}

#[test]
fn test_attack_zone_geometry() {
    assert_eq!(AttackDirection::Up.to_offset(10.0), Vec2::new(0.0, 10.0));
    assert_eq!(AttackDirection::Left.to_offset(10.0), Vec2::new(-10.0, 0.0));

    // Zones are elongated along the swing
    assert_eq!(AttackDirection::Right.zone_size(30.0, 20.0), Vec2::new(30.0, 20.0));
    assert_eq!(AttackDirection::Down.zone_size(30.0, 20.0), Vec2::new(20.0, 30.0));
}

#[test]
fn test_attack_zone_size_comes_from_tuning() {
    let tuning = CombatTuning::default();
    assert_eq!(
        AttackDirection::Right.zone_size(tuning.attack_zone_length, tuning.attack_zone_width),
        Vec2::new(tuning.attack_zone_length, tuning.attack_zone_width)
    );
    // Vertical swings rotate the same footprint
    assert_eq!(
        AttackDirection::Up.zone_size(tuning.attack_zone_length, tuning.attack_zone_width),
        Vec2::new(tuning.attack_zone_width, tuning.attack_zone_length)
    );
}

#[test]
fn test_attack_direction_horizontal_sign() {
    assert_eq!(AttackDirection::Left.horizontal_sign(), -1.0);
    assert_eq!(AttackDirection::Right.horizontal_sign(), 1.0);
    assert_eq!(AttackDirection::Up.horizontal_sign(), 0.0);
}
