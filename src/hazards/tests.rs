use bevy::prelude::*;

use super::components::{
    any_web_holds, dominant_axis, FragileTile, Launcher, LauncherKind, SpiderWeb, StruckSide,
};

#[test]
fn test_struck_side_horizontal_hits() {
    let tile = Vec2::new(100.0, 50.0);
    assert_eq!(
        StruckSide::infer(tile, Vec2::new(60.0, 52.0)),
        StruckSide::Left
    );
    assert_eq!(
        StruckSide::infer(tile, Vec2::new(140.0, 48.0)),
        StruckSide::Right
    );
}

#[test]
fn test_struck_side_vertical_hits() {
    let tile = Vec2::new(0.0, 0.0);
    assert_eq!(
        StruckSide::infer(tile, Vec2::new(2.0, -30.0)),
        StruckSide::Bottom
    );
    assert_eq!(
        StruckSide::infer(tile, Vec2::new(-3.0, 28.0)),
        StruckSide::Top
    );
}

#[test]
fn test_struck_side_tie_counts_as_vertical() {
    let tile = Vec2::ZERO;
    assert_eq!(
        StruckSide::infer(tile, Vec2::new(-10.0, -10.0)),
        StruckSide::Bottom
    );
    assert_eq!(
        StruckSide::infer(tile, Vec2::new(10.0, 10.0)),
        StruckSide::Top
    );
}

#[test]
fn test_fragile_tile_face_permissions() {
    let tile = FragileTile::new(true, false, true, false);
    assert!(tile.allows(StruckSide::Top));
    assert!(!tile.allows(StruckSide::Bottom));
    assert!(tile.allows(StruckSide::Left));
    assert!(!tile.allows(StruckSide::Right));

    let open = FragileTile::new(true, true, true, true);
    assert!(open.allows(StruckSide::Top));
    assert!(open.allows(StruckSide::Bottom));
    assert!(open.allows(StruckSide::Left));
    assert!(open.allows(StruckSide::Right));
    assert!(!open.broken);
}

#[test]
fn test_dominant_axis_picks_larger_component() {
    assert_eq!(
        dominant_axis(Vec2::new(1.0, 0.0)),
        Some(Vec2::new(1.0, 0.0))
    );
    assert_eq!(
        dominant_axis(Vec2::new(-1.0, 0.4)),
        Some(Vec2::new(-1.0, 0.0))
    );
    assert_eq!(
        dominant_axis(Vec2::new(0.0, -1.0)),
        Some(Vec2::new(0.0, -1.0))
    );
    assert_eq!(
        dominant_axis(Vec2::new(0.3, 0.9)),
        Some(Vec2::new(0.0, 1.0))
    );
}

#[test]
fn test_dominant_axis_ties_go_vertical() {
    assert_eq!(
        dominant_axis(Vec2::new(1.0, 1.0)),
        Some(Vec2::new(0.0, 1.0))
    );
    assert_eq!(
        dominant_axis(Vec2::new(-1.0, -1.0)),
        Some(Vec2::new(0.0, -1.0))
    );
}

#[test]
fn test_dominant_axis_neutral_is_none() {
    assert_eq!(dominant_axis(Vec2::ZERO), None);
}

#[test]
fn test_overlapping_webs_keep_hold_until_last_exit() {
    let player = Entity::PLACEHOLDER;
    let mut web_a = SpiderWeb::default();
    let mut web_b = SpiderWeb::default();
    web_a.occupant = Some(player);
    web_b.occupant = Some(player);

    // Leaving the first web: the second still holds, speed stays capped
    web_a.occupant = None;
    assert!(any_web_holds([&web_a, &web_b], player));

    web_b.occupant = None;
    assert!(!any_web_holds([&web_a, &web_b], player));
}

#[test]
fn test_launcher_reset_clears_charge() {
    let mut launcher = Launcher::new(LauncherKind::Fixed(Vec2::Y));
    launcher.occupant = Some(Entity::PLACEHOLDER);
    launcher.hold_timer = 0.4;
    launcher.fired_this_stay = true;

    launcher.reset();
    assert!(launcher.occupant.is_none());
    assert_eq!(launcher.hold_timer, 0.0);
    assert!(!launcher.fired_this_stay);
}
