//! Phong material presets.

use glam::Vec3;

use crate::balls::BallKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    /// Texture path relative to the page; modulates the lit colour.
    pub diffuse_map: Option<&'static str>,
}

impl Material {
    const fn plain(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            diffuse_map: None,
        }
    }
}

const fn rgb(r: f32, g: f32, b: f32) -> Vec3 {
    Vec3::new(r, g, b)
}

pub const WOOD_DARK: Material =
    Material::plain(rgb(0.3, 0.2, 0.1), rgb(0.6, 0.4, 0.2), rgb(0.3, 0.3, 0.3), 32.0);
pub const WOOD_LIGHT: Material =
    Material::plain(rgb(0.2, 0.15, 0.1), rgb(0.4, 0.3, 0.2), rgb(0.1, 0.1, 0.1), 32.0);
pub const RUBBER: Material =
    Material::plain(rgb(0.1, 0.1, 0.1), rgb(0.3, 0.3, 0.3), rgb(0.05, 0.05, 0.05), 4.0);
pub const WHITE: Material =
    Material::plain(rgb(0.8, 0.8, 0.8), rgb(1.0, 1.0, 1.0), rgb(0.5, 0.5, 0.5), 32.0);
pub const BLACK: Material =
    Material::plain(rgb(0.1, 0.1, 0.1), rgb(0.0, 0.0, 0.0), rgb(0.1, 0.1, 0.1), 32.0);

pub const FELT: Material = Material {
    diffuse_map: Some("texture/felt.png"),
    ..Material::plain(rgb(0.1, 0.3, 0.1), rgb(0.2, 0.5, 0.2), rgb(0.1, 0.1, 0.1), 10.0)
};
pub const RAIL_WOOD: Material = Material {
    diffuse_map: Some("texture/wood.png"),
    ..Material::plain(rgb(0.4, 0.3, 0.2), rgb(0.8, 0.6, 0.4), rgb(0.4, 0.4, 0.4), 64.0)
};
pub const FLOOR: Material = Material {
    diffuse_map: Some("texture/floor.png"),
    ..Material::plain(rgb(0.8, 0.8, 0.8), rgb(0.9, 0.9, 0.9), rgb(0.3, 0.3, 0.3), 32.0)
};
pub const WALLPAPER: Material = Material {
    diffuse_map: Some("texture/wallpaper.png"),
    ..Material::plain(rgb(0.1, 0.1, 0.1), rgb(0.5, 0.5, 0.5), rgb(0.1, 0.1, 0.1), 1.0)
};

const GLOSS: Vec3 = rgb(0.8, 0.8, 0.8);

/// Red, orange, blue, brown, yellow.
pub const RACK_COLORS: [Material; 5] = [
    Material::plain(rgb(0.8, 0.0, 0.0), rgb(1.0, 0.0, 0.0), GLOSS, 128.0),
    Material::plain(rgb(1.0, 0.5, 0.0), rgb(1.0, 0.6, 0.0), GLOSS, 128.0),
    Material::plain(rgb(0.0, 0.0, 0.8), rgb(0.0, 0.0, 1.0), GLOSS, 128.0),
    Material::plain(rgb(0.4, 0.2, 0.0), rgb(0.5, 0.25, 0.0), GLOSS, 128.0),
    Material::plain(rgb(0.8, 0.8, 0.0), rgb(1.0, 1.0, 0.0), GLOSS, 128.0),
];

pub fn ball_material(kind: BallKind) -> Material {
    match kind {
        BallKind::Rack(i) => RACK_COLORS[i % RACK_COLORS.len()],
        BallKind::Cue => WHITE,
        BallKind::Eight => BLACK,
    }
}
