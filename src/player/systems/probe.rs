//! Environment probes: ground, wall, and ceiling contact. These run first
//! each tick so every state machine downstream reads fresh contact data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::components::{GameLayer, MovementState, Player, WallContact};
use crate::player::resources::{PlayerInput, PlayerTuning};

/// Half extents used when the player collider is not a rectangle.
const FALLBACK_HALF_EXTENTS: Vec2 = Vec2::new(14.0, 10.0);

pub(crate) fn collider_half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(cuboid) => Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y),
        None => FALLBACK_HALF_EXTENTS,
    }
}

/// Ground contact: a thin box overlap just under the feet, with a
/// three-ray fallback for thin ledges the box can straddle. Any one
/// positive result counts.
pub(crate) fn detect_ground(
    spatial: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let Ok((entity, transform, collider, mut state)) = query.single_mut() else {
        return;
    };
    let half = collider_half_extents(collider);
    let origin = transform.translation.truncate();
    let filter =
        SpatialQueryFilter::from_mask([GameLayer::Ground]).with_excluded_entities([entity]);

    let probe = Collider::rectangle(half.x * 1.6, tuning.ground_probe_depth);
    let probe_pos = origin - Vec2::new(0.0, half.y + tuning.ground_probe_depth * 0.5);
    let mut grounded = !spatial
        .shape_intersections(&probe, probe_pos, 0.0, &filter)
        .is_empty();

    if !grounded {
        let reach = half.y + tuning.ground_probe_depth;
        for offset in [0.0, -half.x * 0.8, half.x * 0.8] {
            let ray_origin = origin + Vec2::new(offset, 0.0);
            if spatial
                .cast_ray(ray_origin, Dir2::NEG_Y, reach, true, &filter)
                .is_some()
            {
                grounded = true;
                break;
            }
        }
    }

    let was_grounded = state.on_ground;
    state.on_ground = grounded;
    if grounded && !was_grounded {
        state.land();
    }
}

/// Wall contact: three rays per side at top, middle, and bottom of the
/// collider, accepting hits only within the cling distance. The last side
/// sticks while clinging so a wall jump still knows which way is away.
pub(crate) fn detect_walls(
    spatial: SpatialQuery,
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let Ok((entity, transform, collider, mut state)) = query.single_mut() else {
        return;
    };
    let half = collider_half_extents(collider);
    let origin = transform.translation.truncate();
    let filter = SpatialQueryFilter::from_mask([GameLayer::Wall]).with_excluded_entities([entity]);
    let reach = half.x + tuning.cling_distance;

    let mut left = false;
    let mut right = false;
    for dy in [half.y * 0.9, 0.0, -half.y * 0.9] {
        let ray_origin = origin + Vec2::new(0.0, dy);
        if !left
            && spatial
                .cast_ray(ray_origin, Dir2::NEG_X, reach, true, &filter)
                .is_some()
        {
            left = true;
        }
        if !right
            && spatial
                .cast_ray(ray_origin, Dir2::X, reach, true, &filter)
                .is_some()
        {
            right = true;
        }
    }

    let contact = match (left, right) {
        // Narrow shaft: the held direction picks the side
        (true, true) => {
            if input.axis.x < -0.1 {
                WallContact::Left
            } else if input.axis.x > 0.1 {
                WallContact::Right
            } else {
                state.on_wall
            }
        }
        (true, false) => WallContact::Left,
        (false, true) => WallContact::Right,
        (false, false) => WallContact::None,
    };

    if contact == WallContact::None && state.is_clinging {
        return;
    }
    state.on_wall = contact;
}

/// Kills upward velocity on head contact so residual jump speed cannot
/// push the collider into a ceiling.
pub(crate) fn detect_ceiling(
    spatial: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut LinearVelocity), With<Player>>,
) {
    let Ok((entity, transform, collider, mut velocity)) = query.single_mut() else {
        return;
    };
    if velocity.y <= 0.0 {
        return;
    }
    let half = collider_half_extents(collider);
    let origin = transform.translation.truncate() + Vec2::new(0.0, half.y);
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
        .with_excluded_entities([entity]);
    if spatial
        .cast_ray(origin, Dir2::Y, tuning.ceiling_probe_distance, true, &filter)
        .is_some()
    {
        velocity.y = 0.0;
    }
}
