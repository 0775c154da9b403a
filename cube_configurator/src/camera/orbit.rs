//! Orbit camera: left-drag rotates, right-drag pans, wheel zooms, with damping.

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::ui::UiPointerCapture;
use crate::ConfiguratorSet;

const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;
const PIXELS_PER_LINE: f32 = 100.0;

/// Spherical camera rig around `target`. Input moves the goal values; the
/// current values ease toward them every frame.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    goal_target: Vec3,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Convergence rate per second. Higher is snappier.
    pub damping: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin().clamp(-MAX_PITCH, MAX_PITCH);
        Self {
            target,
            yaw,
            pitch,
            radius,
            goal_target: target,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_radius: radius,
            min_radius: 20.0,
            max_radius: 900.0,
            damping: 12.0,
            rotate_speed: 0.005,
            pan_speed: 0.0015,
            zoom_speed: 0.1,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.goal_yaw -= delta.x * self.rotate_speed;
        self.goal_pitch =
            (self.goal_pitch + delta.y * self.rotate_speed).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Drag delta in pixels. Scaled by distance so panning feels constant on screen.
    pub fn pan(&mut self, delta: Vec2) {
        let right = Vec3::new(self.goal_yaw.cos(), 0.0, -self.goal_yaw.sin());
        let scale = self.pan_speed * self.goal_radius;
        self.goal_target += (-delta.x * right + delta.y * Vec3::Y) * scale;
    }

    /// Scroll in lines; positive zooms in.
    pub fn zoom(&mut self, lines: f32) {
        self.goal_radius = (self.goal_radius * (-lines * self.zoom_speed).exp())
            .clamp(self.min_radius, self.max_radius);
    }

    /// Eases current values toward the goals over `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let t = 1.0 - (-self.damping * dt).exp();
        self.yaw += (self.goal_yaw - self.yaw) * t;
        self.pitch += (self.goal_pitch - self.pitch) * t;
        self.radius += (self.goal_radius - self.radius) * t;
        self.target = self.target.lerp(self.goal_target, t);
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.add_systems(Update, orbit_camera_system.in_set(ConfiguratorSet::View));
}

fn orbit_camera_system(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    capture: Option<Res<UiPointerCapture>>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let drag: Vec2 = motion.read().map(|m| m.delta).sum();
    let scroll: f32 = wheel
        .read()
        .map(|w| match w.unit {
            MouseScrollUnit::Line => w.y,
            MouseScrollUnit::Pixel => w.y / PIXELS_PER_LINE,
        })
        .sum();
    let captured = capture.is_some_and(|c| c.0);

    for (mut orbit, mut transform) in &mut cameras {
        if !captured {
            if mouse.pressed(MouseButton::Left) {
                orbit.rotate(drag);
            } else if mouse.pressed(MouseButton::Right) {
                orbit.pan(drag);
            }
            if scroll != 0.0 {
                orbit.zoom(scroll);
            }
        }
        orbit.step(time.delta_secs());
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EYE: Vec3 = Vec3::new(120.0, 60.0, 180.0);

    #[test]
    fn looking_from_reproduces_eye() {
        let orbit = OrbitCamera::looking_from(EYE, Vec3::ZERO);
        assert!(orbit.eye().distance(EYE) < 1e-3);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut orbit = OrbitCamera::looking_from(EYE, Vec3::ZERO);
        orbit.rotate(Vec2::new(0.0, 1.0e6));
        for _ in 0..200 {
            orbit.step(0.05);
        }
        assert!(orbit.pitch <= MAX_PITCH + 1e-5);
        assert!(orbit.eye().is_finite());
    }

    #[test]
    fn zoom_respects_bounds() {
        let mut orbit = OrbitCamera::looking_from(EYE, Vec3::ZERO);
        orbit.zoom(1.0e4);
        for _ in 0..200 {
            orbit.step(0.05);
        }
        assert!((orbit.radius - orbit.min_radius).abs() < 1e-2);

        orbit.zoom(-1.0e4);
        for _ in 0..200 {
            orbit.step(0.05);
        }
        assert!((orbit.radius - orbit.max_radius).abs() < 1e-1);
    }

    #[test]
    fn damping_converges_gradually() {
        let mut orbit = OrbitCamera::looking_from(EYE, Vec3::ZERO);
        let start_yaw = orbit.yaw;
        orbit.rotate(Vec2::new(-100.0, 0.0));
        let goal = start_yaw + 100.0 * orbit.rotate_speed;

        orbit.step(1.0 / 60.0);
        assert!(orbit.yaw > start_yaw && orbit.yaw < goal);

        for _ in 0..600 {
            orbit.step(1.0 / 60.0);
        }
        assert!((orbit.yaw - goal).abs() < 1e-4);
    }

    #[test]
    fn pan_moves_target() {
        let mut orbit = OrbitCamera::looking_from(EYE, Vec3::ZERO);
        orbit.pan(Vec2::new(0.0, 100.0));
        for _ in 0..600 {
            orbit.step(1.0 / 60.0);
        }
        assert!(orbit.target.y > 0.0);
    }
}
