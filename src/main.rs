use bevy::prelude::*;

mod config;
mod systems;

use config::CAMERA_DISTANCE;
use systems::bodies::BodiesPlugin;
use systems::camera::{OrbitCamPlugin, OrbitCamera};
use systems::input::SimInputPlugin;
use systems::orbit::OrbitClockPlugin;
use systems::ui::OverlayUiPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(OrbitClockPlugin)
        .add_plugins(SimInputPlugin)
        .add_plugins(BodiesPlugin)
        .add_plugins(OrbitCamPlugin)
        .add_plugins(OverlayUiPlugin)
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.0)))
        .add_systems(Startup, setup)
        .run()
}

fn setup(mut commands: Commands) {
    info!("left mouse button starts the animation, right mouse button pauses it");
    info!("arrow up speeds the animation up, arrow down slows it down");
    info!("middle mouse drag orbits the camera, scroll wheel zooms");

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::new(CAMERA_DISTANCE),
    ));
}
