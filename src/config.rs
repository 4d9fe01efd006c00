//! Fixed scene layout and animation timings.
//!
//! World units are roughly metres; the felt sits at `TABLE_SURFACE_Y`.

use glam::Vec3;

pub const BALL_RADIUS: f32 = 0.1;
pub const TABLE_SURFACE_Y: f32 = 0.77;
pub const BALL_Y: f32 = TABLE_SURFACE_Y + BALL_RADIUS;

pub const WHITE_BALL_START: Vec3 = Vec3::new(0.0, BALL_Y, 0.0);
pub const BLACK_BALL_START: Vec3 = Vec3::new(-0.58, BALL_Y, 0.28);
/// The white ball stops where the black ball started.
pub const WHITE_BALL_TARGET: Vec3 = BLACK_BALL_START;

/// Corner pockets the black ball can be sent to, in search order.
pub const SINK_POCKETS: [Vec3; 4] = [
    Vec3::new(-1.75, 0.83, -0.85),
    Vec3::new(1.75, 0.83, -0.85),
    Vec3::new(-1.75, 0.83, 0.85),
    Vec3::new(1.75, 0.83, 0.85),
];

pub const POCKET_LIGHT_OFFSET_Y: f32 = 0.1;
pub const POCKET_LIGHT_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.5);
/// Upper bound on point lights the shader accepts.
pub const MAX_POINT_LIGHTS: usize = 4;

pub const CUE_BASE_POSITION: Vec3 = Vec3::new(0.058, 0.87, -0.028);
pub const CUE_PIVOT: Vec3 = Vec3::new(-1.75, 0.83, 0.85);
pub const CUE_SCALE_CENTER: Vec3 = Vec3::new(-0.5, 0.0, 0.0);
pub const CUE_TARGET_ROTATION: f32 = -std::f32::consts::FRAC_PI_2;
/// Point near the black ball the cue nudges toward before a strike.
pub const CUE_AIM_POINT: Vec3 = Vec3::new(-0.58, TABLE_SURFACE_Y + 0.03, 0.28);
pub const CUE_NUDGE_DISTANCE: f32 = 0.25;
pub const CUE_MIN_STANDOFF: f32 = 0.1;

/// Durations (seconds) and delays (milliseconds) of the strike sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub white_ball_sec: f32,
    /// Delay between the strike and the black ball starting to roll.
    pub black_ball_delay_ms: f64,
    pub black_ball_sec: f32,
    /// Black-ball progress past which the pocket light appears.
    pub light_trigger_progress: f32,
    pub light_fade_sec: f32,
    pub cue_rotation_sec: f32,
    pub cue_scale_sec: f32,
    pub camera_view_sec: f32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            white_ball_sec: 0.2,
            black_ball_delay_ms: 150.0,
            black_ball_sec: 1.0,
            light_trigger_progress: 0.95,
            light_fade_sec: 0.5,
            cue_rotation_sec: 1.5,
            cue_scale_sec: 1.0,
            camera_view_sec: 1.0,
        }
    }
}
