//! Camera, lights and the initial build request.

use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::ui::DimensionsChanged;

const CAMERA_START: Vec3 = Vec3::new(120.0, 60.0, 180.0);
const FOV_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::looking_from(CAMERA_START, Vec3::ZERO),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(15., 25., 15.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
    });
}

/// Builds the first row of blocks from the default inputs.
pub fn request_initial_build(mut changed: EventWriter<DimensionsChanged>) {
    changed.send(DimensionsChanged);
}
