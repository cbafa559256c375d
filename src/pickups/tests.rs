//! Pickup dispatch tests.

use super::PickupKind;
use crate::player::Abilities;

#[test]
fn test_each_ability_pickup_grants_only_its_flag() {
    let mut abilities = Abilities::default();
    assert_eq!(PickupKind::Dash.grant(&mut abilities), None);
    assert!(abilities.dash);
    assert!(!abilities.double_jump);
    assert!(!abilities.wall_cling);

    let mut abilities = Abilities::default();
    assert_eq!(PickupKind::DoubleJump.grant(&mut abilities), None);
    assert!(abilities.double_jump);
    assert!(!abilities.dash);
    assert!(!abilities.wall_cling);

    let mut abilities = Abilities::default();
    assert_eq!(PickupKind::WallCling.grant(&mut abilities), None);
    assert!(abilities.wall_cling);
    assert!(!abilities.dash);
    assert!(!abilities.double_jump);
}

#[test]
fn test_heal_pickup_leaves_abilities_alone() {
    let mut abilities = Abilities::default();
    assert_eq!(PickupKind::Heal(2).grant(&mut abilities), Some(2));
    assert!(!abilities.dash);
    assert!(!abilities.double_jump);
    assert!(!abilities.wall_cling);
}

#[test]
fn test_grants_accumulate() {
    let mut abilities = Abilities::default();
    PickupKind::Dash.grant(&mut abilities);
    PickupKind::WallCling.grant(&mut abilities);
    assert!(abilities.dash);
    assert!(abilities.wall_cling);
    assert!(!abilities.double_jump);
}
