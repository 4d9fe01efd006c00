//! The pool scene and its strike sequence.
//!
//! `PoolScene` owns the controllers and is the only writer of their state.
//! The renderer reads draw lists and lights out of it once per frame.

use glam::Mat4;
use log::info;

use crate::balls::{BallController, BallEvent};
use crate::cue::{CueController, CuePart};
use crate::geometry::Shape;
use crate::light::{LightUniforms, PointLight};
use crate::materials::{self, Material};
use crate::table;

/// One mesh draw with its material and model matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub shape: Shape,
    pub material: Material,
    pub transform: Mat4,
}

fn cue_part_item(part: CuePart, transform: Mat4) -> DrawItem {
    let (shape, material) = match part {
        CuePart::Shaft => (Shape::CueShaft, materials::WOOD_LIGHT),
        CuePart::Tip => (Shape::CueTip, materials::RUBBER),
        CuePart::Butt => (Shape::CueButt, materials::WOOD_DARK),
    };
    DrawItem {
        shape,
        material,
        transform,
    }
}

pub struct PoolScene {
    balls: BallController,
    cue: CueController,
    room: Vec<DrawItem>,
    table: Vec<DrawItem>,
}

impl PoolScene {
    pub fn new() -> Self {
        Self::with_controllers(BallController::new(), CueController::new())
    }

    pub fn with_controllers(balls: BallController, cue: CueController) -> Self {
        Self {
            balls,
            cue,
            room: table::room(),
            table: table::table(),
        }
    }

    /// Nudge the cue and start the ball sequence.
    pub fn strike(&mut self, now_ms: f64) {
        self.cue.move_toward_black_ball();
        self.balls.trigger_strike(now_ms);
    }

    pub fn reset(&mut self) {
        self.cue.reset_cue_position();
        self.balls.reset_animation();
        info!("scene reset, ready for another strike");
    }

    /// Advance every controller to the same `now_ms`: balls and pocket light
    /// first, then the cue, which starts swinging from the moment the black
    /// ball dropped rather than from the frame that saw it.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(BallEvent::Sunk { at_ms, .. }) = self.balls.update(now_ms) {
            self.cue.start_rotation(at_ms);
        }
        self.cue.update(now_ms);
    }

    pub fn balls(&self) -> &BallController {
        &self.balls
    }

    pub fn cue(&self) -> &CueController {
        &self.cue
    }

    pub fn room_draws(&self) -> &[DrawItem] {
        &self.room
    }

    pub fn table_draws(&self) -> &[DrawItem] {
        &self.table
    }

    pub fn ball_draws(&self) -> Vec<DrawItem> {
        self.balls
            .visible_balls()
            .map(|ball| DrawItem {
                shape: Shape::Sphere,
                material: materials::ball_material(ball.kind),
                transform: ball.transform(),
            })
            .collect()
    }

    /// Empty once the cue has vanished.
    pub fn cue_draws(&self) -> Vec<DrawItem> {
        self.cue
            .draws()
            .into_iter()
            .map(|(part, transform)| cue_part_item(part, transform))
            .collect()
    }

    pub fn point_lights(&self) -> &[PointLight] {
        self.balls.point_lights()
    }

    pub fn light_uniforms(&self) -> LightUniforms {
        LightUniforms::pack(self.point_lights())
    }
}

impl Default for PoolScene {
    fn default() -> Self {
        Self::new()
    }
}
