//! Player HUD: the health bar and its change bounce.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::HealthChangedEvent;

const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 20.0;
const BAR_PADDING: f32 = 16.0;
/// Peak size of the bounce that plays on every health change.
const PULSE_SCALE: f32 = 1.2;
const PULSE_TIME: f32 = 0.2;

/// Marker for the health bar container. Carries the bounce timer.
#[derive(Component)]
pub struct HealthBar {
    pulse_timer: f32,
}

/// Marker for the health bar fill element
#[derive(Component)]
pub struct HealthBarFill;

pub(crate) fn spawn_health_bar(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            HealthBar { pulse_timer: 0.0 },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(BAR_PADDING),
                top: Val::Px(BAR_PADDING),
                width: Val::Px(BAR_WIDTH),
                height: Val::Px(BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            // Health bar fill
            parent.spawn((
                HealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });
}

/// Resizes the fill to the reported fraction and restarts the bounce. The
/// bar only moves when a health change is announced.
pub(crate) fn update_health_bar(
    mut events: MessageReader<HealthChangedEvent>,
    mut bars: Query<&mut HealthBar>,
    mut fills: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    let fraction = if event.max > 0 {
        (event.current as f32 / event.max as f32).clamp(0.0, 1.0)
    } else {
        0.0
    };

    for (mut node, mut bg_color) in &mut fills {
        node.width = Val::Percent(fraction * 100.0);

        // Color gradient: green -> yellow -> red
        let color = if fraction > 0.5 {
            let t = (fraction - 0.5) * 2.0;
            Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
        } else {
            let t = fraction * 2.0;
            Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
        };
        bg_color.0 = color;
    }

    for mut bar in &mut bars {
        bar.pulse_timer = PULSE_TIME;
    }
}

/// The container briefly swells after a change and settles back to its
/// resting size as the timer runs out.
pub(crate) fn pulse_health_bar(time: Res<Time>, mut bars: Query<(&mut HealthBar, &mut Node)>) {
    let dt = time.delta_secs();
    for (mut bar, mut node) in &mut bars {
        if bar.pulse_timer <= 0.0 {
            continue;
        }
        bar.pulse_timer = (bar.pulse_timer - dt).max(0.0);
        let scale = 1.0 + (PULSE_SCALE - 1.0) * (bar.pulse_timer / PULSE_TIME);
        node.width = Val::Px(BAR_WIDTH * scale);
        node.height = Val::Px(BAR_HEIGHT * scale);
    }
}
