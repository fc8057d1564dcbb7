//! Spawns the sun, earth and moon and keeps their transforms in step
//! with the orbit clock.
//!
//! The entity hierarchy mirrors the matrix stack of the classic
//! fixed-function version of this scene: a pivot rotated by the orbit
//! angle, a translated anchor at orbit distance, and the spinning body
//! itself as its child.

use bevy::prelude::*;

use crate::config::{
    EARTH_ORBIT_PERIOD, EARTH_ORBIT_RADIUS, EARTH_RADIUS, EARTH_SPIN_PERIOD, MOON_ORBIT_RADIUS,
    MOON_RADIUS, SUN_RADIUS,
};
use crate::systems::orbit::{self, OrbitClock};

pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies)
            .add_systems(Update, sync_transforms.after(orbit::tick));
    }
}

/// Which snapshot angle drives this entity's rotation.
#[derive(Component, Clone, Copy)]
pub enum BodyFrame {
    EarthOrbit,
    EarthSpin,
    MoonOrbit,
    MoonSpin,
}

fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // material colors carried over from the yellow/blue/white
    // fixed-function materials of the original scene
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.8, 0.1),
        emissive: LinearRgba::rgb(2.8, 2.8, 0.0),
        metallic: 0.0,
        perceptual_roughness: 0.4,
        ..default()
    });
    let earth_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.15, 0.15, 0.8),
        metallic: 0.0,
        perceptual_roughness: 0.45,
        ..default()
    });
    let moon_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.9, 0.9),
        metallic: 0.0,
        perceptual_roughness: 0.5,
        ..default()
    });

    // sun, fixed at the origin
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().ico(32).unwrap())),
        MeshMaterial3d(sun_material),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // earth orbit pivot at the sun
    let earth_pivot = commands
        .spawn((
            BodyFrame::EarthOrbit,
            Transform::default(),
            GlobalTransform::default(),
            Visibility::default(),
        ))
        .id();

    // earth body, translated out along the orbit, spinning in place
    commands
        .spawn((
            BodyFrame::EarthSpin,
            Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS).mesh().ico(16).unwrap())),
            MeshMaterial3d(earth_material),
            Transform::from_xyz(EARTH_ORBIT_RADIUS, 0.0, 0.0),
        ))
        .insert(ChildOf(earth_pivot));

    // moon orbit pivot rides at the earth's position
    let moon_pivot = commands
        .spawn((
            BodyFrame::MoonOrbit,
            Transform::from_xyz(EARTH_ORBIT_RADIUS, 0.0, 0.0),
            GlobalTransform::default(),
            Visibility::default(),
        ))
        .insert(ChildOf(earth_pivot))
        .id();

    commands
        .spawn((
            BodyFrame::MoonSpin,
            Mesh3d(meshes.add(Sphere::new(MOON_RADIUS).mesh().ico(16).unwrap())),
            MeshMaterial3d(moon_material),
            Transform::from_xyz(MOON_ORBIT_RADIUS, 0.0, 0.0),
        ))
        .insert(ChildOf(moon_pivot));

    // sunlight
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.,
            ..default()
        },
        Transform::from_xyz(10.0, 5.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// apply the snapshot to the hierarchy once per frame
fn sync_transforms(clock: Res<OrbitClock>, mut frames: Query<(&BodyFrame, &mut Transform)>) {
    let angles = clock.snapshot();

    for (frame, mut transform) in frames.iter_mut() {
        let degrees = match frame {
            BodyFrame::EarthOrbit => 360.0 * angles.earth_orbit / EARTH_ORBIT_PERIOD,
            BodyFrame::EarthSpin => 360.0 * angles.earth_spin / EARTH_SPIN_PERIOD,
            // the moon angles feed in directly, keeping the original
            // scene's slow moon motion
            BodyFrame::MoonOrbit => angles.moon_orbit,
            BodyFrame::MoonSpin => angles.moon_spin / 24.0,
        };
        transform.rotation = Quat::from_rotation_y((degrees as f32).to_radians());
    }
}
