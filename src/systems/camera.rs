use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::config::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE};

pub struct OrbitCamPlugin;

impl Plugin for OrbitCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update);
    }
}

// free-look camera orbiting the sun
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub dragging: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: 30.0,
            yaw: 0.0,
            pitch: 0.2,
            sensitivity: 0.005,
            dragging: false,
        }
    }
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            distance,
            ..default()
        }
    }

    // spherical coordinates around the origin
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.sin();
        Vec3::new(x, y, z)
    }
}

fn update(
    mut cameras: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moves: EventReader<CursorMoved>,
    mut scrolls: EventReader<MouseWheel>,
) {
    for (mut transform, mut camera) in cameras.iter_mut() {
        // middle button drags the view; left/right are taken by the
        // run/pause controls
        if mouse_buttons.just_pressed(MouseButton::Middle) {
            camera.dragging = true;
        }
        if mouse_buttons.just_released(MouseButton::Middle) {
            camera.dragging = false;
        }

        if camera.dragging {
            for motion in cursor_moves.read() {
                if let Some(delta) = motion.delta {
                    camera.yaw += delta.x * camera.sensitivity;
                    camera.pitch += delta.y * camera.sensitivity;
                }
                camera.pitch = camera.pitch.clamp(-1.5, 1.5);
            }
        }

        for scroll in scrolls.read() {
            camera.distance -= scroll.y * 2.0;
            camera.distance = camera
                .distance
                .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        }

        transform.translation = camera.position();
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}
