//! Orbit camera with scripted view transitions.

use glam::{Mat4, Vec3};
use log::debug;

use crate::progress::{compute_progress, lerp};

const ORBIT_SENSITIVITY: f32 = 0.01;
const ZOOM_SENSITIVITY: f32 = 0.01;
const MIN_DISTANCE: f32 = 3.0;
const MAX_DISTANCE: f32 = 20.0;
/// Just short of the poles, where the look-at basis degenerates.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Eye, look-at target and up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl View {
    /// Straight down onto the table, far end up.
    pub fn top() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 0.0),
            center: Vec3::ZERO,
            up: Vec3::NEG_Z,
        }
    }

    pub fn original() -> Self {
        Self {
            eye: Vec3::new(0.0, 3.0, 8.0),
            center: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    fn lerp(&self, to: &View, t: f32) -> View {
        let mix = |a: Vec3, b: Vec3| Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t));
        View {
            eye: mix(self.eye, to.eye),
            center: mix(self.center, to.center),
            up: mix(self.up, to.up),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraState {
    Idle,
    Animating { from: View, to: View, start_ms: f64 },
}

pub struct OrbitCamera {
    view: View,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    yaw: f32,
    pitch: f32,
    distance: f32,
    dragging: Option<(f32, f32)>,
    transition_sec: f32,
    state: CameraState,
}

impl OrbitCamera {
    pub fn new(transition_sec: f32) -> Self {
        Self {
            view: View::original(),
            fov_y: 45f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            yaw: 0.0,
            pitch: 0.0,
            distance: 8.0,
            dragging: None,
            transition_sec,
            state: CameraState::Idle,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn eye(&self) -> Vec3 {
        self.view.eye
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.view.eye, self.view.center, self.view.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Put the eye on the orbit sphere looking at the origin, Y up. A
    /// scripted view may have left `up` parallel to the new view direction.
    fn place_on_orbit(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.view = View {
            eye: Vec3::new(
                self.distance * sin_yaw * cos_pitch,
                self.distance * sin_pitch,
                self.distance * cos_yaw * cos_pitch,
            ),
            center: Vec3::ZERO,
            up: Vec3::Y,
        };
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = Some((x, y));
    }

    pub fn pointer_up(&mut self) {
        self.dragging = None;
    }

    /// Orbit while dragging. Pitch stops just short of the poles.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some((last_x, last_y)) = self.dragging else {
            return;
        };
        self.yaw += (x - last_x) * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + (y - last_y) * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
        self.dragging = Some((x, y));
        self.place_on_orbit();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.distance = (self.distance + delta_y * ZOOM_SENSITIVITY).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.place_on_orbit();
    }

    /// Glide from the current view to `target`, replacing any glide in flight.
    pub fn animate(&mut self, target: View, now_ms: f64) {
        self.state = CameraState::Animating {
            from: self.view,
            to: target,
            start_ms: now_ms,
        };
        debug!("camera heading to {:?}", target.eye);
    }

    pub fn update(&mut self, now_ms: f64) {
        let CameraState::Animating { from, to, start_ms } = self.state else {
            return;
        };
        let t = compute_progress(start_ms, now_ms, self.transition_sec);
        self.view = from.lerp(&to, t);
        if t >= 1.0 {
            self.state = CameraState::Idle;
            debug!("camera arrived");
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(crate::config::Timings::default().camera_view_sec)
    }
}
