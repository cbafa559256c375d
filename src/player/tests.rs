use super::components::{Abilities, Facing, JumpKind, MovementState, WallContact};
use super::resources::PlayerTuning;

fn all_abilities() -> Abilities {
    Abilities {
        double_jump: true,
        dash: true,
        wall_cling: true,
    }
}

/// Airborne with the coyote window long expired.
fn airborne() -> MovementState {
    let mut state = MovementState::default();
    state.on_ground = false;
    state.coyote_timer = 1.0;
    state
}

#[test]
fn test_ground_jump_when_grounded() {
    let mut state = MovementState::default();
    state.on_ground = true;
    let tuning = PlayerTuning::default();
    assert_eq!(
        state.chosen_jump(&all_abilities(), 0.0, &tuning),
        Some(JumpKind::Ground)
    );
}

#[test]
fn test_coyote_grace_allows_ground_jump() {
    let tuning = PlayerTuning::default();
    let mut state = MovementState::default();
    state.on_ground = false;
    state.coyote_timer = tuning.coyote_time * 0.5;
    assert_eq!(
        state.chosen_jump(&Abilities::default(), -10.0, &tuning),
        Some(JumpKind::Ground)
    );

    state.coyote_timer = tuning.coyote_time * 2.0;
    assert_eq!(state.chosen_jump(&Abilities::default(), -10.0, &tuning), None);
}

#[test]
fn test_double_jump_only_while_falling() {
    let tuning = PlayerTuning::default();
    let state = airborne();
    assert_eq!(state.chosen_jump(&all_abilities(), 50.0, &tuning), None);
    assert_eq!(
        state.chosen_jump(&all_abilities(), -50.0, &tuning),
        Some(JumpKind::Double)
    );
}

#[test]
fn test_double_jump_single_use_per_airborne_cycle() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    assert_eq!(
        state.chosen_jump(&all_abilities(), -50.0, &tuning),
        Some(JumpKind::Double)
    );
    state.start_double_jump();
    assert!(state.double_jump_used);
    assert_eq!(state.chosen_jump(&all_abilities(), -50.0, &tuning), None);
}

#[test]
fn test_landing_refills_air_charges() {
    let mut state = airborne();
    state.double_jump_used = true;
    state.air_dash_used = true;
    state.is_jumping = true;

    state.land();

    assert!(!state.double_jump_used);
    assert!(!state.air_dash_used);
    assert!(!state.is_jumping);
    assert_eq!(state.coyote_timer, 0.0);
}

#[test]
fn test_cling_entry_refills_air_charges() {
    let mut state = airborne();
    state.double_jump_used = true;
    state.air_dash_used = true;

    state.begin_cling();

    assert!(state.is_clinging);
    assert!(!state.is_jumping);
    assert!(!state.double_jump_used);
    assert!(!state.air_dash_used);
}

#[test]
fn test_wall_jump_only_while_clinging() {
    let tuning = PlayerTuning::default();
    let abilities = Abilities {
        wall_cling: true,
        ..Abilities::default()
    };
    let mut state = airborne();
    state.on_wall = WallContact::Left;
    assert_eq!(state.chosen_jump(&abilities, -10.0, &tuning), None);

    state.is_clinging = true;
    assert_eq!(
        state.chosen_jump(&abilities, 0.0, &tuning),
        Some(JumpKind::Wall)
    );
}

#[test]
fn test_wall_jump_beats_double_jump_while_clinging() {
    // Cling refills the double jump, so without this gate the wall jump
    // could never fire for a character that owns both abilities.
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.on_wall = WallContact::Right;
    state.is_clinging = true;
    assert_eq!(
        state.chosen_jump(&all_abilities(), 0.0, &tuning),
        Some(JumpKind::Wall)
    );
}

#[test]
fn test_cling_needs_input_into_wall() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.on_wall = WallContact::Left;

    assert!(state.cling_eligible(&all_abilities(), -1.0, 0.0, &tuning));
    assert!(!state.cling_eligible(&all_abilities(), 0.0, 0.0, &tuning));
    assert!(!state.cling_eligible(&all_abilities(), 1.0, 0.0, &tuning));
}

#[test]
fn test_cling_blocked_while_rising() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.on_wall = WallContact::Right;
    assert!(!state.cling_eligible(&all_abilities(), 1.0, 120.0, &tuning));
    assert!(state.cling_eligible(&all_abilities(), 1.0, -120.0, &tuning));
}

#[test]
fn test_cling_blocked_during_early_jump_ascent() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.on_wall = WallContact::Left;
    state.is_jumping = true;

    state.jump_hold_timer = tuning.min_jump_hold * 0.5;
    assert!(!state.cling_eligible(&all_abilities(), -1.0, 0.0, &tuning));

    state.jump_hold_timer = tuning.min_jump_hold * 2.0;
    assert!(state.cling_eligible(&all_abilities(), -1.0, 0.0, &tuning));
}

#[test]
fn test_cling_requires_ability() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.on_wall = WallContact::Left;
    assert!(!state.cling_eligible(&Abilities::default(), -1.0, 0.0, &tuning));
}

#[test]
fn test_dash_single_air_charge() {
    let tuning = PlayerTuning::default();
    let abilities = all_abilities();
    let mut state = airborne();

    assert!(state.dash_available(&abilities));
    state.start_dash(1.0, &tuning);
    state.end_dash();
    state.dash_cooldown_timer = 0.0;

    // Still airborne, charge spent
    assert!(!state.dash_available(&abilities));

    state.on_ground = true;
    state.land();
    assert!(state.dash_available(&abilities));
}

#[test]
fn test_dash_expiring_on_ground_restores_charge() {
    let tuning = PlayerTuning::default();
    let mut state = MovementState::default();
    state.on_ground = true;

    state.start_dash(-1.0, &tuning);
    assert!(state.is_dashing);
    assert!(state.air_dash_used);

    state.end_dash();
    assert!(!state.is_dashing);
    assert!(!state.air_dash_used);
}

#[test]
fn test_dash_cooldown_blocks_restart() {
    let tuning = PlayerTuning::default();
    let abilities = all_abilities();
    let mut state = MovementState::default();
    state.on_ground = true;

    state.start_dash(1.0, &tuning);
    state.end_dash();
    assert!(state.dash_cooldown_timer > 0.0);
    assert!(!state.dash_available(&abilities));

    state.dash_cooldown_timer = 0.0;
    assert!(state.dash_available(&abilities));
}

#[test]
fn test_dash_requires_ability() {
    let state = MovementState::default();
    assert!(!state.dash_available(&Abilities::default()));
}

#[test]
fn test_start_dash_interrupts_cling() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.begin_cling();

    state.start_dash(1.0, &tuning);
    assert!(!state.is_clinging);
    assert!(state.is_dashing);
}

#[test]
fn test_wall_jump_ends_cling() {
    let mut state = airborne();
    state.begin_cling();

    state.start_wall_jump();
    assert!(!state.is_clinging);
    assert!(state.is_jumping);
    assert_eq!(state.jump_hold_timer, 0.0);
}

#[test]
fn test_jump_sustain_stops_past_max_hold() {
    let tuning = PlayerTuning::default();
    let mut state = MovementState::default();
    state.on_ground = true;
    state.start_jump(&tuning);

    state.jump_hold_timer = tuning.max_jump_hold * 0.5;
    assert!(state.sustains_jump(true, 100.0, &tuning));

    // Past the window gravity curves the arc again, held or not
    state.jump_hold_timer = tuning.max_jump_hold * 1.5;
    assert!(!state.sustains_jump(true, 100.0, &tuning));
}

#[test]
fn test_jump_sustain_needs_hold_and_ascent() {
    let tuning = PlayerTuning::default();
    let mut state = MovementState::default();
    state.on_ground = true;
    state.start_jump(&tuning);

    assert!(state.sustains_jump(true, 100.0, &tuning));
    // Releasing the button stops the re-pin
    assert!(!state.sustains_jump(false, 100.0, &tuning));
    // So does reaching the apex or hitting a ceiling
    assert!(!state.sustains_jump(true, 0.0, &tuning));
    assert!(!state.sustains_jump(true, -10.0, &tuning));

    // No sustain without a jump in flight
    state.is_jumping = false;
    assert!(!state.sustains_jump(true, 100.0, &tuning));
}

#[test]
fn test_dash_owns_velocity() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    assert_eq!(state.dash_velocity(&tuning), None);

    state.start_dash(-1.0, &tuning);
    let pinned = state.dash_velocity(&tuning).unwrap();
    assert_eq!(pinned.x, -tuning.dash_speed);
    assert_eq!(pinned.y, 0.0);

    state.end_dash();
    assert_eq!(state.dash_velocity(&tuning), None);
}

#[test]
fn test_start_jump_consumes_coyote_window() {
    let tuning = PlayerTuning::default();
    let mut state = MovementState::default();
    state.on_ground = false;
    state.coyote_timer = tuning.coyote_time * 0.5;

    state.start_jump(&tuning);
    assert!(state.coyote_timer >= tuning.coyote_time);
    assert_eq!(state.chosen_jump(&Abilities::default(), 100.0, &tuning), None);
}

#[test]
fn test_gravity_suppressed_during_dash_cling_knockback() {
    let mut state = MovementState::default();
    assert!(!state.gravity_suppressed(false));
    assert!(state.gravity_suppressed(true));

    state.is_dashing = true;
    assert!(state.gravity_suppressed(false));
    state.is_dashing = false;

    state.is_clinging = true;
    assert!(state.gravity_suppressed(false));
}

#[test]
fn test_speed_multiplier_clamped() {
    let mut state = MovementState::default();
    state.set_speed_multiplier(2.0);
    assert_eq!(state.speed_multiplier, 1.0);

    state.set_speed_multiplier(-0.5);
    assert_eq!(state.speed_multiplier, 0.0);

    state.set_speed_multiplier(0.4);
    assert_eq!(state.speed_multiplier, 0.4);

    state.reset_speed_multiplier();
    assert_eq!(state.speed_multiplier, 1.0);
}

#[test]
fn test_clear_transient_flags() {
    let tuning = PlayerTuning::default();
    let mut state = airborne();
    state.start_jump(&tuning);
    state.start_dash(1.0, &tuning);
    state.jump_buffer_timer = 0.1;

    state.clear_transient();

    assert!(!state.is_jumping);
    assert!(!state.is_clinging);
    assert!(!state.is_dashing);
    assert_eq!(state.dash_timer, 0.0);
    assert_eq!(state.jump_buffer_timer, 0.0);
}

#[test]
fn test_facing_from_input_sign() {
    assert_eq!(Facing::Right.from_sign(-1.0), Facing::Left);
    assert_eq!(Facing::Left.from_sign(1.0), Facing::Right);
    assert_eq!(Facing::Left.from_sign(0.0), Facing::Left);
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
}
