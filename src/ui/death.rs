//! Death overlay and the retry flow.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{PlayerDiedEvent, PlayerRespawnedEvent, RespawnRequestedEvent};
use crate::level::RestSpot;
use crate::player::Player;

/// Marker for the death overlay
#[derive(Component)]
pub struct DeathOverlay;

/// Marker for the retry button on the overlay
#[derive(Component)]
pub struct RetryButton;

/// Marker for the quit button on the overlay
#[derive(Component)]
pub struct QuitButton;

pub(crate) fn show_death_overlay(
    mut commands: Commands,
    mut deaths: MessageReader<PlayerDiedEvent>,
    existing: Query<(), With<DeathOverlay>>,
) {
    if deaths.is_empty() {
        return;
    }
    deaths.clear();
    if !existing.is_empty() {
        return;
    }
    spawn_overlay(&mut commands);
}

fn spawn_overlay(commands: &mut Commands) {
    // Full screen dark overlay
    commands
        .spawn((
            DeathOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            // High z-index to sit on top of everything
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("KNOCKED OUT"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Every cat lands on its feet. Eventually."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RetryButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        margin: UiRect::bottom(Val::Px(16.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RETRY"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent
                .spawn((
                    QuitButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(12.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("QUIT"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.7, 0.7, 0.7)),
                ));

            parent.spawn((
                Text::new("[Enter]/[J] retry  -  [Esc] quit"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

/// Retry sends the player back to the nearest surviving rest spot. With
/// every bed destroyed the run restarts from the beginning.
pub(crate) fn handle_retry(
    keyboard: Res<ButtonInput<KeyCode>>,
    interactions: Query<&Interaction, (With<RetryButton>, Changed<Interaction>)>,
    overlays: Query<(), With<DeathOverlay>>,
    players: Query<&Transform, With<Player>>,
    rest_spots: Query<&Transform, With<RestSpot>>,
    mut respawns: MessageWriter<RespawnRequestedEvent>,
) {
    if overlays.is_empty() {
        return;
    }
    let should_retry = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || keyboard.just_pressed(KeyCode::KeyJ)
        || interactions
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);
    if !should_retry {
        return;
    }

    let position = players.single().ok().and_then(|player| {
        let player_pos = player.translation.truncate();
        rest_spots
            .iter()
            .map(|transform| transform.translation.truncate())
            .min_by(|a, b| {
                a.distance_squared(player_pos)
                    .total_cmp(&b.distance_squared(player_pos))
            })
    });
    if position.is_none() {
        warn!("No rest spot left, falling back to the respawn anchor");
    }
    respawns.write(RespawnRequestedEvent { position });
}

pub(crate) fn handle_quit(
    keyboard: Res<ButtonInput<KeyCode>>,
    interactions: Query<&Interaction, (With<QuitButton>, Changed<Interaction>)>,
    overlays: Query<(), With<DeathOverlay>>,
    mut exit: MessageWriter<AppExit>,
) {
    if overlays.is_empty() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Escape)
        || interactions
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed)
    {
        exit.write(AppExit::Success);
    }
}

pub(crate) fn dismiss_death_overlay(
    mut commands: Commands,
    mut respawned: MessageReader<PlayerRespawnedEvent>,
    overlays: Query<Entity, With<DeathOverlay>>,
) {
    if respawned.is_empty() {
        return;
    }
    respawned.clear();
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}
