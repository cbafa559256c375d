use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::HealEvent;
use crate::pickups::components::{BobMotion, Pickup, PickupKind};
use crate::player::{Abilities, Player};

const BOB_AMPLITUDE: f32 = 4.0;
const BOB_RATE: f32 = 2.0;

pub(crate) fn bob_pickups(time: Res<Time>, mut query: Query<(&BobMotion, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (bob, mut transform) in &mut query {
        transform.translation.y = bob.anchor_y + (t * BOB_RATE + bob.phase).sin() * BOB_AMPLITUDE;
    }
}

/// Touching a pickup consumes it. Snacks heal even at full health; ability
/// pickups flip the matching unlock.
pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    mut heal_events: MessageWriter<HealEvent>,
    pickups: Query<&Pickup>,
    mut players: Query<(Entity, &mut Abilities), With<Player>>,
) {
    let Ok((player_entity, mut abilities)) = players.single_mut() else {
        return;
    };
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (a, b) in pairs {
            if b != player_entity {
                continue;
            }
            let Ok(pickup) = pickups.get(a) else {
                continue;
            };
            match pickup.kind.grant(&mut abilities) {
                Some(amount) => {
                    heal_events.write(HealEvent {
                        target: player_entity,
                        amount,
                    });
                    info!("Collected a snack");
                }
                None => info!("Unlocked {:?}", pickup.kind),
            }
            commands.entity(a).despawn();
        }
    }
}
