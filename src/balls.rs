//! Ball layout and the scripted strike: the white ball rolls onto the black
//! ball's spot, the black ball slides into the nearest corner pocket, and a
//! light fades in above that pocket.

use glam::{Mat4, Quat, Vec3};
use log::{debug, info, warn};

use crate::config::{
    Timings, BALL_RADIUS, BALL_Y, BLACK_BALL_START, SINK_POCKETS, WHITE_BALL_START,
    WHITE_BALL_TARGET,
};
use crate::light::{PocketLight, PointLight};
use crate::progress::{lerp_xz, AnimationState};
use crate::schedule::Schedule;

const RACK_SPACING: f32 = 0.16;
const RACK_APEX: (f32, f32) = (-0.4, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    /// Static coloured ball; the index picks its colour.
    Rack(usize),
    Cue,
    Eight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub kind: BallKind,
    pub start: Vec3,
    pub position: Vec3,
    pub radius: f32,
    /// Set once when the ball drops; hides it until a reset.
    pub in_pocket: bool,
}

impl Ball {
    fn new(kind: BallKind, start: Vec3) -> Self {
        Self {
            kind,
            start,
            position: start,
            radius: BALL_RADIUS,
            in_pocket: false,
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.radius),
            Quat::IDENTITY,
            self.position,
        )
    }

    fn restore(&mut self) {
        self.position = self.start;
        self.in_pocket = false;
    }
}

/// Coarse view of where the strike sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    Idle,
    WhiteMoving,
    BlackMoving,
    Sunk,
}

/// Emitted by [`BallController::update`] for other components to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallEvent {
    /// The black ball finished dropping into `pocket`. `at_ms` is when its
    /// roll completed, which may be earlier than the tick that reports it.
    Sunk { pocket: Vec3, at_ms: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    StartBlack,
}

/// Triangle rack positions on the felt (x, z), apex first.
pub fn rack_layout() -> Vec<(f32, f32)> {
    let (x, z) = RACK_APEX;
    let s = RACK_SPACING;
    vec![
        (x, z),
        (x - s * 0.5, z - s * 0.866),
        (x + s * 0.5, z - s * 0.866),
        (x - s, z - s * 1.732),
        (x, z - s * 1.732),
        (x + s, z - s * 1.732),
    ]
}

/// Index of the pocket closest to `from`. Ties keep the first candidate.
pub fn nearest_pocket(pockets: &[Vec3], from: Vec3) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, pocket) in pockets.iter().enumerate() {
        let d = pocket.distance(from);
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

pub struct BallController {
    timings: Timings,
    rack: Vec<Ball>,
    white: Ball,
    black: Ball,
    pockets: Vec<Vec3>,
    triggered: bool,
    white_anim: AnimationState,
    black_anim: AnimationState,
    target_pocket: Option<usize>,
    sunk_emitted: bool,
    light: PocketLight,
    deferred: Schedule<Deferred>,
}

impl BallController {
    pub fn new() -> Self {
        Self::with_config(Timings::default(), SINK_POCKETS.to_vec())
    }

    pub fn with_config(timings: Timings, pockets: Vec<Vec3>) -> Self {
        let rack = rack_layout()
            .into_iter()
            .enumerate()
            .map(|(i, (x, z))| Ball::new(BallKind::Rack(i), Vec3::new(x, BALL_Y, z)))
            .collect();
        Self {
            timings,
            rack,
            white: Ball::new(BallKind::Cue, WHITE_BALL_START),
            black: Ball::new(BallKind::Eight, BLACK_BALL_START),
            pockets,
            triggered: false,
            white_anim: AnimationState::new(timings.white_ball_sec),
            black_anim: AnimationState::new(timings.black_ball_sec),
            target_pocket: None,
            sunk_emitted: false,
            light: PocketLight::new(timings.light_fade_sec),
            deferred: Schedule::new(),
        }
    }

    /// Start the white ball and schedule the black ball. One shot per cycle.
    pub fn trigger_strike(&mut self, now_ms: f64) {
        if self.triggered {
            debug!("strike already triggered, ignoring");
            return;
        }
        self.triggered = true;
        self.white_anim.start(now_ms);
        self.deferred
            .schedule(now_ms + self.timings.black_ball_delay_ms, Deferred::StartBlack);
        info!("strike: white ball moving");
    }

    /// Aim the black ball at its nearest pocket and start it rolling.
    pub fn enter_black_moving(&mut self, now_ms: f64) {
        if self.black_anim.has_started() {
            debug!("black ball already moving, ignoring");
            return;
        }
        let Some(index) = nearest_pocket(&self.pockets, self.black.start) else {
            warn!("no pocket to sink the black ball into");
            return;
        };
        self.target_pocket = Some(index);
        self.black_anim.start(now_ms);
        info!("black ball heading for pocket {index} at {}", self.pockets[index]);
    }

    /// Advance both balls and the pocket light to `now_ms`.
    pub fn update(&mut self, now_ms: f64) -> Option<BallEvent> {
        for (due_ms, event) in self.deferred.take_due(now_ms) {
            match event {
                Deferred::StartBlack => self.enter_black_moving(due_ms),
            }
        }

        if self.white_anim.is_active() {
            let p = self.white_anim.advance(now_ms);
            self.white.position = lerp_xz(self.white.start, WHITE_BALL_TARGET, p);
            if p >= 1.0 {
                self.white_anim.finish();
                debug!("white ball stopped");
            }
        }

        let event = self.update_black(now_ms);
        self.light.update(now_ms);
        event
    }

    fn update_black(&mut self, now_ms: f64) -> Option<BallEvent> {
        if !self.black_anim.is_active() {
            return None;
        }
        let pocket = self.pockets[self.target_pocket?];
        let p = self.black_anim.advance(now_ms);
        self.black.position = lerp_xz(self.black.start, pocket, p);

        if p > self.timings.light_trigger_progress && !self.light.exists() {
            self.light.start_fade_in(pocket, now_ms);
        }
        if p < 1.0 {
            return None;
        }

        self.black_anim.finish();
        self.black.in_pocket = true;
        if !self.light.exists() {
            self.light.start_fade_in(pocket, now_ms);
        }
        if self.sunk_emitted {
            return None;
        }
        self.sunk_emitted = true;
        let at_ms = self.black_anim.end_ms();
        info!("black ball sunk at {at_ms:.0} ms");
        Some(BallEvent::Sunk { pocket, at_ms })
    }

    /// Hard reset: drop any in-flight motion, the pending black-ball start
    /// and the pocket light; put both balls back on their spots.
    pub fn reset_animation(&mut self) {
        self.triggered = false;
        self.sunk_emitted = false;
        self.target_pocket = None;
        self.white_anim.reset();
        self.black_anim.reset();
        self.deferred.clear();
        self.light.reset();
        self.white.restore();
        self.black.restore();
        info!("ball animation reset");
    }

    pub fn phase(&self) -> BallPhase {
        if self.black.in_pocket {
            BallPhase::Sunk
        } else if self.black_anim.is_active() {
            BallPhase::BlackMoving
        } else if self.triggered {
            BallPhase::WhiteMoving
        } else {
            BallPhase::Idle
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn is_white_moving(&self) -> bool {
        self.white_anim.is_active()
    }

    pub fn is_black_moving(&self) -> bool {
        self.black_anim.is_active()
    }

    pub fn white(&self) -> &Ball {
        &self.white
    }

    pub fn black(&self) -> &Ball {
        &self.black
    }

    pub fn target_pocket(&self) -> Option<Vec3> {
        self.target_pocket.map(|i| self.pockets[i])
    }

    pub fn point_lights(&self) -> &[PointLight] {
        self.light.lights()
    }

    /// Every ball, sunk ones included.
    pub fn balls(&self) -> impl Iterator<Item = &Ball> {
        self.rack.iter().chain([&self.white, &self.black])
    }

    /// Balls that should be drawn this frame.
    pub fn visible_balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls().filter(|b| !b.in_pocket)
    }
}

impl Default for BallController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_pocket_picks_closest_corner() {
        assert_eq!(nearest_pocket(&SINK_POCKETS, BLACK_BALL_START), Some(2));
    }

    #[test]
    fn nearest_pocket_tie_keeps_first() {
        let pockets = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)];
        assert_eq!(nearest_pocket(&pockets, Vec3::ZERO), Some(0));
    }

    #[test]
    fn nearest_pocket_of_nothing() {
        assert_eq!(nearest_pocket(&[], Vec3::ZERO), None);
    }

    #[test]
    fn second_strike_is_ignored() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(100.0);
        let halfway = balls.white().position;
        balls.trigger_strike(100.0);
        balls.update(100.0);
        assert_eq!(balls.white().position, halfway);
        assert!(balls.is_white_moving());
    }

    #[test]
    fn white_ball_reaches_target_and_stops() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(100.0);
        assert!((balls.white().position.x - WHITE_BALL_TARGET.x * 0.5).abs() < 1e-6);
        balls.update(250.0);
        assert_eq!(balls.white().position, WHITE_BALL_TARGET);
        assert!(!balls.is_white_moving());
    }

    #[test]
    fn black_ball_waits_for_the_delay() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(149.0);
        assert!(!balls.is_black_moving());
        balls.update(151.0);
        assert!(balls.is_black_moving());
        assert_eq!(balls.phase(), BallPhase::BlackMoving);
    }

    #[test]
    fn light_appears_near_the_end_of_the_roll() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(200.0);
        balls.update(1000.0);
        assert!(balls.point_lights().is_empty());
        balls.update(1120.0);
        assert_eq!(balls.point_lights().len(), 1);
        assert_eq!(balls.point_lights()[0].intensity, 0.0);
    }

    #[test]
    fn sunk_is_emitted_once() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(200.0);
        assert_eq!(
            balls.update(2000.0),
            Some(BallEvent::Sunk {
                pocket: SINK_POCKETS[2],
                at_ms: 1150.0,
            })
        );
        assert_eq!(balls.update(2100.0), None);
        assert!(balls.black().in_pocket);
        assert_eq!(balls.phase(), BallPhase::Sunk);
        assert_eq!(balls.visible_balls().count(), 7);
    }

    #[test]
    fn big_clock_jump_still_creates_light() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(60_000.0);
        assert!(balls.black().in_pocket);
        assert_eq!(balls.point_lights().len(), 1);
        assert_eq!(balls.black().position.x, SINK_POCKETS[2].x);
        assert_eq!(balls.black().position.y, BALL_Y);
    }

    #[test]
    fn no_pockets_degrades_to_noop() {
        let mut balls = BallController::with_config(Timings::default(), Vec::new());
        balls.trigger_strike(0.0);
        assert_eq!(balls.update(5000.0), None);
        assert!(!balls.black().in_pocket);
        assert_eq!(balls.black().position, BLACK_BALL_START);
        assert!(balls.point_lights().is_empty());
    }

    #[test]
    fn reset_mid_roll_restores_everything() {
        let mut balls = BallController::new();
        balls.trigger_strike(0.0);
        balls.update(700.0);
        balls.reset_animation();
        assert_eq!(balls.phase(), BallPhase::Idle);
        assert_eq!(balls.white().position, WHITE_BALL_START);
        assert_eq!(balls.black().position, BLACK_BALL_START);
        assert!(balls.point_lights().is_empty());
        assert_eq!(balls.update(5000.0), None);
        assert!(!balls.is_triggered());
    }

    #[test]
    fn rack_has_six_static_balls() {
        let balls = BallController::new();
        assert_eq!(balls.balls().count(), 8);
        let apex = balls.balls().next().map(|b| b.position);
        assert_eq!(apex, Some(Vec3::new(-0.4, BALL_Y, 0.0)));
    }
}
