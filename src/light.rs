//! Pocket light that fades in when the black ball drops.
//!
//! At most one light exists at a time. A reset discards it entirely so the
//! renderer sees an empty list rather than a zero-intensity light.

use glam::Vec3;
use log::{debug, info};

use crate::config::{MAX_POINT_LIGHTS, POCKET_LIGHT_COLOR, POCKET_LIGHT_OFFSET_Y};
use crate::progress::AnimationState;

/// A point light as uploaded to the fragment shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    /// Fade factor in `[0, 1]`.
    pub intensity: f32,
}

pub struct PocketLight {
    light: Option<PointLight>,
    fade: AnimationState,
}

impl PocketLight {
    pub fn new(fade_sec: f32) -> Self {
        Self {
            light: None,
            fade: AnimationState::new(fade_sec),
        }
    }

    /// Create the light above `pocket` at zero intensity and start the fade.
    pub fn start_fade_in(&mut self, pocket: Vec3, now_ms: f64) {
        let position = pocket + Vec3::Y * POCKET_LIGHT_OFFSET_Y;
        self.light = Some(PointLight {
            position,
            color: POCKET_LIGHT_COLOR,
            intensity: 0.0,
        });
        self.fade.start(now_ms);
        info!("pocket light created at {position}");
    }

    /// Ramp intensity linearly to 1; it stays at 1 once the fade is done.
    pub fn update(&mut self, now_ms: f64) {
        if !self.fade.is_active() {
            return;
        }
        let Some(light) = self.light.as_mut() else {
            return;
        };
        light.intensity = self.fade.advance(now_ms);
        if light.intensity >= 1.0 {
            self.fade.finish();
            debug!("pocket light at full intensity");
        }
    }

    pub fn reset(&mut self) {
        self.light = None;
        self.fade.reset();
    }

    pub fn exists(&self) -> bool {
        self.light.is_some()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_active()
    }

    pub fn lights(&self) -> &[PointLight] {
        self.light.as_slice()
    }
}

/// Point lights flattened into the shader's fixed-size uniform arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightUniforms {
    pub positions: [f32; MAX_POINT_LIGHTS * 3],
    pub colors: [f32; MAX_POINT_LIGHTS * 3],
    pub intensities: [f32; MAX_POINT_LIGHTS],
    pub count: i32,
}

impl LightUniforms {
    /// Pack up to [`MAX_POINT_LIGHTS`] lights; extras are dropped and unused
    /// slots are zero.
    pub fn pack(lights: &[PointLight]) -> Self {
        let mut out = Self {
            positions: [0.0; MAX_POINT_LIGHTS * 3],
            colors: [0.0; MAX_POINT_LIGHTS * 3],
            intensities: [0.0; MAX_POINT_LIGHTS],
            count: 0,
        };
        for (i, light) in lights.iter().take(MAX_POINT_LIGHTS).enumerate() {
            out.positions[i * 3..i * 3 + 3].copy_from_slice(&light.position.to_array());
            out.colors[i * 3..i * 3 + 3].copy_from_slice(&light.color.to_array());
            out.intensities[i] = light.intensity;
            out.count += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pocket() -> Vec3 {
        Vec3::new(-1.75, 0.83, 0.85)
    }

    #[test]
    fn fade_in_starts_dark_above_pocket() {
        let mut light = PocketLight::new(0.5);
        light.start_fade_in(pocket(), 1000.0);
        let l = light.lights()[0];
        assert_eq!(l.intensity, 0.0);
        assert!((l.position.y - 0.93).abs() < 1e-6);
        assert_eq!(l.color, POCKET_LIGHT_COLOR);
    }

    #[test]
    fn intensity_ramps_then_holds() {
        let mut light = PocketLight::new(0.5);
        light.start_fade_in(pocket(), 0.0);
        light.update(250.0);
        assert_eq!(light.lights()[0].intensity, 0.5);
        light.update(800.0);
        assert_eq!(light.lights()[0].intensity, 1.0);
        assert!(!light.is_fading());
        light.update(5000.0);
        assert_eq!(light.lights()[0].intensity, 1.0);
    }

    #[test]
    fn reset_empties_the_list() {
        let mut light = PocketLight::new(0.5);
        light.start_fade_in(pocket(), 0.0);
        light.reset();
        assert!(light.lights().is_empty());
        assert!(!light.is_fading());
    }

    #[test]
    fn pack_fills_unused_slots_with_zero() {
        let l = PointLight {
            position: Vec3::new(1.0, 2.0, 3.0),
            color: Vec3::new(0.8, 0.8, 0.5),
            intensity: 0.25,
        };
        let u = LightUniforms::pack(&[l]);
        assert_eq!(u.count, 1);
        assert_eq!(&u.positions[..3], &[1.0, 2.0, 3.0]);
        assert!(u.positions[3..].iter().all(|&v| v == 0.0));
        assert_eq!(u.intensities, [0.25, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn pack_caps_at_max_lights() {
        let l = PointLight {
            position: Vec3::ONE,
            color: Vec3::ONE,
            intensity: 1.0,
        };
        let u = LightUniforms::pack(&[l; 6]);
        assert_eq!(u.count, MAX_POINT_LIGHTS as i32);
    }
}
