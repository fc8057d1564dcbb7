use bevy::prelude::*;

use crate::config::RATE_STEP;
use crate::systems::orbit::{self, OrbitClock};

pub struct SimInputPlugin;

impl Plugin for SimInputPlugin {
    fn build(&self, app: &mut App) {
        // input lands before the clock steps so a press takes effect
        // on the same frame
        app.add_systems(Update, (handle_mouse, handle_keys).before(orbit::tick));
    }
}

// left button starts the animation, right button stops it
fn handle_mouse(mouse: Res<ButtonInput<MouseButton>>, mut clock: ResMut<OrbitClock>) {
    if mouse.just_pressed(MouseButton::Left) {
        clock.set_running(true);
    }
    if mouse.just_pressed(MouseButton::Right) {
        clock.set_running(false);
    }
}

// arrow up speeds the animation up, arrow down slows it down
fn handle_keys(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<OrbitClock>) {
    if keys.just_pressed(KeyCode::ArrowUp) {
        clock.scale_rate(RATE_STEP);
        info!("animation rate: {:.3}", clock.rate());
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        clock.scale_rate(1.0 / RATE_STEP);
        info!("animation rate: {:.3}", clock.rate());
    }
}
