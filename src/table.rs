//! Static room and table content: skybox, floor, table body, felt, pocket
//! discs and rails. None of it moves.

use glam::{Mat4, Quat, Vec3};

use crate::geometry::{Shape, SKYBOX_SIZE};
use crate::materials::{self, Material};
use crate::scene::DrawItem;

const SKYBOX_CENTER_Y: f32 = 3.23;

const POCKETS: [Vec3; 6] = [
    Vec3::new(-1.75, 0.83, -0.85),
    Vec3::new(0.0, 0.83, -0.9),
    Vec3::new(1.75, 0.83, -0.85),
    Vec3::new(-1.75, 0.83, 0.85),
    Vec3::new(0.0, 0.83, 0.9),
    Vec3::new(1.75, 0.83, 0.85),
];

/// (centre, size) of the four cushions.
const RAILS: [(Vec3, Vec3); 4] = [
    (Vec3::new(0.0, 0.8, -0.95), Vec3::new(3.82, 0.18, 0.1)),
    (Vec3::new(0.0, 0.8, 0.95), Vec3::new(3.82, 0.18, 0.1)),
    (Vec3::new(-1.85, 0.8, 0.0), Vec3::new(0.12, 0.18, 1.8)),
    (Vec3::new(1.85, 0.8, 0.0), Vec3::new(0.12, 0.18, 1.8)),
];

fn placed(shape: Shape, material: Material, at: Vec3, size: Vec3) -> DrawItem {
    DrawItem {
        shape,
        material,
        transform: Mat4::from_scale_rotation_translation(size, Quat::IDENTITY, at),
    }
}

/// Skybox first: the renderer draws it with depth writes off.
pub fn room() -> Vec<DrawItem> {
    let center = Vec3::new(0.0, SKYBOX_CENTER_Y, 0.0);
    let floor = Vec3::new(0.0, SKYBOX_CENTER_Y - SKYBOX_SIZE / 2.0, 0.0);
    vec![
        placed(Shape::Skybox, materials::WALLPAPER, center, Vec3::ONE),
        placed(Shape::Floor, materials::FLOOR, floor, Vec3::ONE),
    ]
}

pub fn table() -> Vec<DrawItem> {
    let mut items = vec![
        placed(Shape::Cube, materials::WOOD_DARK, Vec3::ZERO, Vec3::new(3.8, 1.54, 1.9)),
        placed(
            Shape::Cube,
            materials::FELT,
            Vec3::new(0.0, 0.81, 0.0),
            Vec3::new(3.6, 0.02, 1.8),
        ),
    ];
    items.extend(
        POCKETS
            .iter()
            .map(|&p| placed(Shape::Sphere, materials::RUBBER, p, Vec3::new(0.15, 0.01, 0.15))),
    );
    items.extend(
        RAILS
            .iter()
            .map(|&(at, size)| placed(Shape::Cube, materials::RAIL_WOOD, at, size)),
    );
    items
}
