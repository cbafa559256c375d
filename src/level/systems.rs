use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::AttackZone;
use crate::core::RespawnAnchor;
use crate::level::components::RestSpot;
use crate::player::Player;

/// Resting at a bed records it as the fallback respawn point, for the day
/// every bed is gone.
pub(crate) fn record_checkpoints(
    mut collisions: MessageReader<CollisionStart>,
    mut anchor: ResMut<RespawnAnchor>,
    spots: Query<&Transform, With<RestSpot>>,
    players: Query<(), With<Player>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            let Ok(transform) = spots.get(a) else {
                continue;
            };
            if !players.contains(b) {
                continue;
            }
            let position = transform.translation.truncate();
            if anchor.position() != position {
                anchor.set_position(position);
                info!("Checkpoint set at ({:.0}, {:.0})", position.x, position.y);
            }
        }
    }
}

/// A melee swing that clips a rest spot destroys it. Fewer beds means a
/// longer walk back after dying.
pub(crate) fn break_rest_spots(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    zones: Query<(), With<AttackZone>>,
    spots: Query<(), With<RestSpot>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            if spots.contains(a) && zones.contains(b) {
                info!("Rest spot destroyed");
                commands.entity(a).despawn();
            }
        }
    }
}
