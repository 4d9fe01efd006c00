//! Time-driven progress for one-shot animations.
//!
//! Every animated entity in the scene owns an [`AnimationState`]. Progress is
//! derived from wall-clock milliseconds and clamped to `[0, 1]`, so a stalled
//! tab or a large frame gap snaps to the end instead of overshooting.

use glam::Vec3;

/// Normalised elapsed fraction of an animation started at `start_ms`.
///
/// Returns `clamp((now - start) / 1000 / duration, 0, 1)`. A non-positive
/// duration counts as already finished.
pub fn compute_progress(start_ms: f64, now_ms: f64, duration_sec: f32) -> f32 {
    if duration_sec <= 0.0 {
        return 1.0;
    }
    let elapsed_sec = (now_ms - start_ms) / 1000.0;
    (elapsed_sec / duration_sec as f64).clamp(0.0, 1.0) as f32
}

/// Linear interpolation between two scalars. Exact at both ends.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

/// Interpolate X and Z, keeping `from.y`. Balls slide on the felt.
#[inline]
pub fn lerp_xz(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(from.x, to.x, t), from.y, lerp(from.z, to.z, t))
}

/// Progress bookkeeping for a single animation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    active: bool,
    started: bool,
    start_ms: f64,
    duration_sec: f32,
    progress: f32,
}

impl AnimationState {
    pub fn new(duration_sec: f32) -> Self {
        Self {
            active: false,
            started: false,
            start_ms: 0.0,
            duration_sec,
            progress: 0.0,
        }
    }

    /// Record the start time and mark the run active.
    pub fn start(&mut self, now_ms: f64) {
        self.active = true;
        self.started = true;
        self.start_ms = now_ms;
        self.progress = 0.0;
    }

    /// Progress at `now_ms` without touching any state.
    pub fn compute_progress(&self, now_ms: f64) -> f32 {
        compute_progress(self.start_ms, now_ms, self.duration_sec)
    }

    /// Advance stored progress to `now_ms`. Stored progress never decreases
    /// within a run, even if the clock steps backwards. Returns the new value.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        if self.active {
            self.progress = self.progress.max(self.compute_progress(now_ms));
        }
        self.progress
    }

    /// Clear the active flag. Progress is kept.
    pub fn finish(&mut self) {
        self.active = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.duration_sec);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once `start` ran in this cycle, whether or not the run is done.
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.progress >= 1.0
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn duration_sec(&self) -> f32 {
        self.duration_sec
    }

    /// Time at which progress reaches 1.
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_sec as f64 * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_at_start_and_one_at_end() {
        assert_eq!(compute_progress(500.0, 500.0, 0.2), 0.0);
        assert_eq!(compute_progress(500.0, 700.0, 0.2), 1.0);
    }

    #[test]
    fn progress_clamps_past_the_end() {
        assert_eq!(compute_progress(0.0, 60_000.0, 1.0), 1.0);
        assert_eq!(compute_progress(1000.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn progress_is_monotonic_in_elapsed_time() {
        let mut last = 0.0;
        for ms in (0..2000).step_by(7) {
            let p = compute_progress(0.0, ms as f64, 1.5);
            assert!(p >= last, "progress went backwards at {ms}ms");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn zero_duration_is_already_done() {
        assert_eq!(compute_progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn compute_is_idempotent() {
        let mut anim = AnimationState::new(1.0);
        anim.start(100.0);
        assert_eq!(anim.compute_progress(600.0), anim.compute_progress(600.0));
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn advance_ignores_clock_going_backwards() {
        let mut anim = AnimationState::new(1.0);
        anim.start(0.0);
        assert_eq!(anim.advance(500.0), 0.5);
        assert_eq!(anim.advance(200.0), 0.5);
    }

    #[test]
    fn advance_is_frozen_once_finished() {
        let mut anim = AnimationState::new(1.0);
        anim.start(0.0);
        anim.advance(250.0);
        anim.finish();
        assert_eq!(anim.advance(900.0), 0.25);
        assert!(anim.has_started());
        assert!(!anim.is_active());
    }

    #[test]
    fn reset_keeps_duration() {
        let mut anim = AnimationState::new(0.5);
        anim.start(10.0);
        anim.advance(1000.0);
        assert!(anim.is_complete());
        anim.reset();
        assert_eq!(anim, AnimationState::new(0.5));
    }

    #[test]
    fn end_time_follows_start_and_duration() {
        let mut anim = AnimationState::new(1.5);
        anim.start(150.0);
        assert_eq!(anim.end_ms(), 1650.0);
    }

    #[test]
    fn lerp_xz_holds_height() {
        let p = lerp_xz(Vec3::new(0.0, 0.87, 0.0), Vec3::new(-1.0, 5.0, 2.0), 0.5);
        assert_eq!(p, Vec3::new(-0.5, 0.87, 1.0));
    }
}
