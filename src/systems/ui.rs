use bevy::prelude::*;
use chrono::{TimeZone, Utc};

use crate::config::SIM_EPOCH;
use crate::systems::orbit::OrbitClock;

pub struct OverlayUiPlugin;

impl Plugin for OverlayUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui)
            .add_systems(Update, (update_sim_time, update_rate));
    }
}

// UI component to display the simulated date and time
#[derive(Component)]
pub struct SimTimeDisplay;

// UI component to display the animation rate and run state
#[derive(Component)]
pub struct RateDisplay;

fn setup_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                justify_content: JustifyContent::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Time: --"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                SimTimeDisplay,
            ));

            parent.spawn((
                Text::new("Rate: --"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                RateDisplay,
                Node {
                    margin: UiRect::top(Val::Px(5.0)), // spacing
                    ..default()
                },
            ));
        });
}

// map the unwrapped spin-unit total onto a calendar readout, one spin
// unit counting as an hour
fn update_sim_time(clock: Res<OrbitClock>, mut text_query: Query<&mut Text, With<SimTimeDisplay>>) {
    if let Ok(mut text) = text_query.single_mut() {
        let epoch = chrono::DateTime::parse_from_rfc3339(SIM_EPOCH)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc.timestamp_opt(0, 0).unwrap());

        let millis = (clock.elapsed() * 3_600_000.0) as i64;
        let sim_time = epoch
            .checked_add_signed(chrono::Duration::milliseconds(millis))
            .unwrap_or(epoch);

        text.0 = format!("Time: {}", sim_time.format("%Y-%m-%d %H:%M"));
    }
}

fn update_rate(clock: Res<OrbitClock>, mut text_query: Query<&mut Text, With<RateDisplay>>) {
    if let Ok(mut text) = text_query.single_mut() {
        let state = if clock.is_running() {
            "running"
        } else {
            "paused"
        };
        text.0 = format!("Rate: {:.3} ({})", clock.rate(), state);
    }
}
