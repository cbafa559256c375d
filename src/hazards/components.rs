//! Hazard components: spikes, webs, launchers, fragile tiles, and one-way
//! platforms.

use bevy::prelude::*;
use std::collections::HashMap;

/// Damages on entry, and again whenever an occupant's invincibility runs
/// out while still inside.
#[derive(Component, Debug, Default)]
pub struct Spikes {
    /// Last observed invincibility flag per occupant.
    pub occupants: HashMap<Entity, bool>,
}

/// Slows whoever wades through it; the web restores full speed on exit.
#[derive(Component, Debug, Default)]
pub struct SpiderWeb {
    pub occupant: Option<Entity>,
}

/// True while any web still holds `entity`. Overlapping webs each track
/// their own occupant, so leaving one must not lift the slow another still
/// imposes.
pub(crate) fn any_web_holds<'a>(
    webs: impl IntoIterator<Item = &'a SpiderWeb>,
    entity: Entity,
) -> bool {
    webs.into_iter().any(|web| web.occupant == Some(entity))
}

#[derive(Debug, Clone, Copy)]
pub enum LauncherKind {
    /// Always fires along a fixed direction.
    Fixed(Vec2),
    /// Fires along the dominant input axis. With no input held it either
    /// fires along the fallback or keeps waiting.
    InputDirected {
        fallback: Vec2,
        fire_without_input: bool,
    },
}

/// Charge-up launcher: an occupant that stays inside for the hold time is
/// flung out, once per stay.
#[derive(Component, Debug)]
pub struct Launcher {
    pub kind: LauncherKind,
    pub hold_timer: f32,
    pub occupant: Option<Entity>,
    pub fired_this_stay: bool,
}

impl Launcher {
    pub fn new(kind: LauncherKind) -> Self {
        Self {
            kind,
            hold_timer: 0.0,
            occupant: None,
            fired_this_stay: false,
        }
    }

    pub fn reset(&mut self) {
        self.hold_timer = 0.0;
        self.occupant = None;
        self.fired_this_stay = false;
    }
}

/// Collapses the 4-way input to a single axis; the larger magnitude wins
/// and vertical wins ties.
pub(crate) fn dominant_axis(axis: Vec2) -> Option<Vec2> {
    if axis.x.abs() > axis.y.abs() {
        Some(Vec2::new(axis.x.signum(), 0.0))
    } else if axis.y.abs() > 0.0 {
        Some(Vec2::new(0.0, axis.y.signum()))
    } else {
        None
    }
}

/// Which face of a tile a strike landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StruckSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl StruckSide {
    /// Inferred from where the strike came from relative to the tile; the
    /// dominant axis of the offset picks the face.
    pub fn infer(tile_pos: Vec2, strike_pos: Vec2) -> StruckSide {
        let diff = tile_pos - strike_pos;
        if diff.x.abs() > diff.y.abs() {
            if diff.x > 0.0 {
                StruckSide::Left
            } else {
                StruckSide::Right
            }
        } else if diff.y > 0.0 {
            StruckSide::Bottom
        } else {
            StruckSide::Top
        }
    }
}

/// Breakable tile; each face can individually permit or reject strikes.
#[derive(Component, Debug)]
pub struct FragileTile {
    pub break_top: bool,
    pub break_bottom: bool,
    pub break_left: bool,
    pub break_right: bool,
    pub broken: bool,
}

impl FragileTile {
    pub fn new(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self {
            break_top: top,
            break_bottom: bottom,
            break_left: left,
            break_right: right,
            broken: false,
        }
    }

    pub fn allows(&self, side: StruckSide) -> bool {
        match side {
            StruckSide::Top => self.break_top,
            StruckSide::Bottom => self.break_bottom,
            StruckSide::Left => self.break_left,
            StruckSide::Right => self.break_right,
        }
    }
}

/// Broken or spent object waiting for its delayed despawn.
#[derive(Component, Debug)]
pub struct PendingDespawn {
    pub timer: f32,
}

/// Platform the player can cross from below but stands on from above.
#[derive(Component, Debug, Default)]
pub struct OneWayPlatform {
    pub passable: bool,
}
