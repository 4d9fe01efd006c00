//! The cue rig: a pre-strike nudge toward the black ball, then (once the
//! black ball drops) a swing about a fixed pivot followed by a shrink to
//! nothing about a separate scale centre.
//!
//! All three parts share one rig transform; each part's own offset,
//! orientation and scale are applied on top of it.

use glam::{Mat4, Quat, Vec3};
use log::{debug, info};

use crate::config::{
    Timings, CUE_AIM_POINT, CUE_BASE_POSITION, CUE_MIN_STANDOFF, CUE_NUDGE_DISTANCE, CUE_PIVOT,
    CUE_SCALE_CENTER, CUE_TARGET_ROTATION,
};
use crate::progress::AnimationState;

/// Tilt of the shaft and butt away from the table, in radians.
const CUE_TILT: f32 = 0.142856 * std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuePart {
    Shaft,
    Tip,
    Butt,
}

impl CuePart {
    pub const ALL: [CuePart; 3] = [CuePart::Shaft, CuePart::Tip, CuePart::Butt];

    fn local_offset(self) -> Vec3 {
        match self {
            CuePart::Shaft => Vec3::new(0.54034, 0.0, -0.26058),
            CuePart::Tip => Vec3::ZERO,
            CuePart::Butt => Vec3::new(1.21574 - 0.0058, 0.0, -0.58691 + 0.0028),
        }
    }

    fn local_rotation(self) -> Quat {
        match self {
            CuePart::Tip => Quat::IDENTITY,
            CuePart::Shaft | CuePart::Butt => {
                Quat::from_rotation_z(std::f32::consts::FRAC_PI_2) * Quat::from_rotation_x(CUE_TILT)
            }
        }
    }

    fn local_scale(self) -> Vec3 {
        match self {
            CuePart::Tip => Vec3::splat(0.03),
            CuePart::Shaft | CuePart::Butt => Vec3::ONE,
        }
    }

    /// Fixed part transform applied after the shared rig transform.
    pub fn local_transform(self) -> Mat4 {
        Mat4::from_translation(self.local_offset())
            * Mat4::from_quat(self.local_rotation())
            * Mat4::from_scale(self.local_scale())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuePhase {
    Idle,
    Rotating,
    Scaling,
    Vanished,
}

/// Snapshot of the shared rig parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueRigState {
    pub base_position: Vec3,
    pub pivot_point: Vec3,
    pub scale_center: Vec3,
    pub rotation_progress: f32,
    pub scale_progress: f32,
    pub target_rotation: f32,
}

/// Rotation of `angle` about Z through `pivot`, composed in the cue's
/// translate-to-pivot, rotate, translate-back order.
fn swing(base: Vec3, pivot: Vec3, angle: f32) -> Mat4 {
    Mat4::from_translation(base)
        * Mat4::from_translation(-pivot)
        * Mat4::from_rotation_z(angle)
        * Mat4::from_translation(pivot)
}

pub struct CueController {
    base_position: Vec3,
    has_moved: bool,
    rotation: AnimationState,
    scaling: AnimationState,
}

impl CueController {
    pub fn new() -> Self {
        Self::with_timings(Timings::default())
    }

    pub fn with_timings(timings: Timings) -> Self {
        Self {
            base_position: CUE_BASE_POSITION,
            has_moved: false,
            rotation: AnimationState::new(timings.cue_rotation_sec),
            scaling: AnimationState::new(timings.cue_scale_sec),
        }
    }

    /// One-shot nudge toward the black ball in the XZ plane, stopping no
    /// closer than the minimum standoff.
    pub fn move_toward_black_ball(&mut self) {
        if self.has_moved {
            debug!("cue already nudged, ignoring");
            return;
        }
        let to_target = Vec3::new(
            CUE_AIM_POINT.x - self.base_position.x,
            0.0,
            CUE_AIM_POINT.z - self.base_position.z,
        );
        let length = to_target.length();
        if length <= f32::EPSILON {
            debug!("cue already at the black ball");
            return;
        }
        let step = CUE_NUDGE_DISTANCE.min(length - CUE_MIN_STANDOFF).max(0.0);
        self.base_position += to_target / length * step;
        self.has_moved = true;
        info!("cue moved {step:.2} to {}", self.base_position);
    }

    pub fn start_rotation(&mut self, now_ms: f64) {
        if self.rotation.has_started() {
            debug!("cue rotation already started, ignoring");
            return;
        }
        self.rotation.start(now_ms);
        info!("cue rotation started");
    }

    pub fn start_scaling(&mut self, now_ms: f64) {
        if self.scaling.has_started() {
            debug!("cue scaling already started, ignoring");
            return;
        }
        self.scaling.start(now_ms);
        info!("cue scaling started");
    }

    pub fn update(&mut self, now_ms: f64) {
        if self.rotation.is_active() && self.rotation.advance(now_ms) >= 1.0 {
            self.rotation.finish();
            info!("cue rotation finished");
            self.start_scaling(self.rotation.end_ms());
        }
        if self.scaling.is_active() && self.scaling.advance(now_ms) >= 1.0 {
            self.scaling.finish();
            info!("cue vanished");
        }
    }

    /// Hard reset to the original, un-rotated, full-size cue.
    pub fn reset_cue_position(&mut self) {
        self.base_position = CUE_BASE_POSITION;
        self.has_moved = false;
        self.rotation.reset();
        self.scaling.reset();
        info!("cue reset");
    }

    /// Shared transform for all parts. Once scaling has begun the swing is
    /// frozen at its full angle.
    pub fn rig_transform(&self) -> Mat4 {
        if !self.scaling.has_started() {
            let angle = CUE_TARGET_ROTATION * self.rotation.progress();
            return swing(self.base_position, CUE_PIVOT, angle);
        }
        let factor = 1.0 - self.scaling.progress();
        swing(self.base_position, CUE_PIVOT, CUE_TARGET_ROTATION)
            * Mat4::from_translation(-CUE_SCALE_CENTER)
            * Mat4::from_scale(Vec3::splat(factor))
            * Mat4::from_translation(CUE_SCALE_CENTER)
    }

    pub fn is_visible(&self) -> bool {
        self.scaling.progress() < 1.0
    }

    /// Parts to draw and their model matrices; empty once the cue vanished.
    pub fn draws(&self) -> Vec<(CuePart, Mat4)> {
        if !self.is_visible() {
            return Vec::new();
        }
        let rig = self.rig_transform();
        CuePart::ALL
            .iter()
            .map(|&part| (part, rig * part.local_transform()))
            .collect()
    }

    pub fn phase(&self) -> CuePhase {
        if !self.is_visible() {
            CuePhase::Vanished
        } else if self.scaling.is_active() {
            CuePhase::Scaling
        } else if self.rotation.is_active() {
            CuePhase::Rotating
        } else {
            CuePhase::Idle
        }
    }

    pub fn state(&self) -> CueRigState {
        CueRigState {
            base_position: self.base_position,
            pivot_point: CUE_PIVOT,
            scale_center: CUE_SCALE_CENTER,
            rotation_progress: self.rotation.progress(),
            scale_progress: self.scaling.progress(),
            target_rotation: CUE_TARGET_ROTATION,
        }
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_active()
    }

    pub fn is_scaling(&self) -> bool {
        self.scaling.is_active()
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }
}

impl Default for CueController {
    fn default() -> Self {
        Self::new()
    }
}
