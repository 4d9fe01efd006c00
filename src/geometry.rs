//! Indexed triangle meshes for the scene primitives. Unit-sized unless a size
//! is passed; callers scale through the model matrix.

use std::f32::consts::{PI, TAU};

pub const SKYBOX_SIZE: f32 = 8.0;

/// Every mesh the scene draws; the renderer uploads each one once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Sphere,
    CueShaft,
    CueTip,
    CueButt,
    Skybox,
    Floor,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::Cube,
        Shape::Sphere,
        Shape::CueShaft,
        Shape::CueTip,
        Shape::CueButt,
        Shape::Skybox,
        Shape::Floor,
    ];

    pub fn mesh(self) -> MeshData {
        match self {
            Shape::Cube => cube(),
            Shape::Sphere => sphere(16, 16),
            Shape::CueShaft => cylinder(0.02, 1.2, 8),
            Shape::CueTip => sphere(8, 8),
            Shape::CueButt => cylinder(0.025, 0.3, 8),
            Shape::Skybox => skybox(SKYBOX_SIZE),
            Shape::Floor => plane(SKYBOX_SIZE, SKYBOX_SIZE),
        }
    }
}

/// Flat vertex streams ready for upload as separate GL buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    fn push_vertex(&mut self, p: [f32; 3], n: [f32; 3], uv: [f32; 2]) {
        self.positions.extend_from_slice(&p);
        self.normals.extend_from_slice(&n);
        self.tex_coords.extend_from_slice(&uv);
    }

    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], uvs: [[f32; 2]; 4]) {
        let base = self.vertex_count() as u16;
        for (p, uv) in corners.iter().zip(uvs.iter()) {
            self.push_vertex(*p, normal, *uv);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Face corners of an axis-aligned cube of half extent `h`, wound
/// counter-clockwise seen from outside, with their outward normals.
fn cube_faces(h: f32) -> [([[f32; 3]; 4], [f32; 3], [[f32; 2]; 4]); 6] {
    [
        (
            [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
            [0.0, 0.0, 1.0],
            [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        ),
        (
            [[-h, -h, -h], [-h, h, -h], [h, h, -h], [h, -h, -h]],
            [0.0, 0.0, -1.0],
            [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
        ),
        (
            [[-h, h, -h], [-h, h, h], [h, h, h], [h, h, -h]],
            [0.0, 1.0, 0.0],
            [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        ),
        (
            [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
            [0.0, -1.0, 0.0],
            [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
        ),
        (
            [[h, -h, -h], [h, h, -h], [h, h, h], [h, -h, h]],
            [1.0, 0.0, 0.0],
            [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        ),
        (
            [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
            [-1.0, 0.0, 0.0],
            [[1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        ),
    ]
}

/// Unit cube centred on the origin.
pub fn cube() -> MeshData {
    let mut mesh = MeshData::default();
    for (corners, normal, uvs) in cube_faces(0.5) {
        mesh.push_quad(corners, normal, uvs);
    }
    mesh
}

/// Cube of edge `size` viewed from the inside: normals point inward.
pub fn skybox(size: f32) -> MeshData {
    let mut mesh = MeshData::default();
    for (corners, normal, uvs) in cube_faces(size / 2.0) {
        mesh.push_quad(corners, normal.map(|c| -c), uvs);
    }
    mesh
}

/// UV sphere of diameter 1.
pub fn sphere(lat_bands: u16, lon_bands: u16) -> MeshData {
    let mut mesh = MeshData::default();
    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        for lon in 0..=lon_bands {
            let phi = lon as f32 * TAU / lon_bands as f32;
            let (sin_p, cos_p) = phi.sin_cos();
            let n = [cos_p * sin_t, cos_t, sin_p * sin_t];
            let uv = [
                1.0 - lon as f32 / lon_bands as f32,
                1.0 - lat as f32 / lat_bands as f32,
            ];
            mesh.push_vertex(n.map(|c| c * 0.5), n, uv);
        }
    }
    for lat in 0..lat_bands {
        for lon in 0..lon_bands {
            let first = lat * (lon_bands + 1) + lon;
            let second = first + lon_bands + 1;
            mesh.indices
                .extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }
    mesh
}

/// Open cylinder along Y, centred on the origin.
pub fn cylinder(radius: f32, height: f32, segments: u16) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin_a, cos_a) = (u * TAU).sin_cos();
        let (x, z) = (cos_a * radius, sin_a * radius);
        let n = [cos_a, 0.0, sin_a];
        mesh.push_vertex([x, -half, z], n, [u, 0.0]);
        mesh.push_vertex([x, half, z], n, [u, 1.0]);
    }
    for i in 0..segments {
        let bottom = i * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        mesh.indices
            .extend_from_slice(&[bottom, next_bottom, top, top, next_bottom, next_top]);
    }
    mesh
}

/// Flat quad in the XZ plane facing +Y.
pub fn plane(width: f32, depth: f32) -> MeshData {
    let (w, d) = (width / 2.0, depth / 2.0);
    let mut mesh = MeshData::default();
    mesh.push_quad(
        [[-w, 0.0, -d], [w, 0.0, -d], [w, 0.0, d], [-w, 0.0, d]],
        [0.0, 1.0, 0.0],
        [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_in_range(mesh: &MeshData) -> bool {
        mesh.indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertex_count())
    }

    #[test]
    fn cube_has_24_vertices_and_12_triangles() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.tex_coords.len(), 48);
        assert!(indices_in_range(&mesh));
    }

    #[test]
    fn skybox_normals_face_inward() {
        let mesh = skybox(8.0);
        for (p, n) in mesh.positions.chunks(3).zip(mesh.normals.chunks(3)) {
            let dot: f32 = p.iter().zip(n).map(|(a, b)| a * b).sum();
            assert!(dot < 0.0);
        }
        assert!(mesh.positions.iter().all(|c| c.abs() == 4.0));
    }

    #[test]
    fn sphere_vertices_sit_on_the_surface() {
        let mesh = sphere(16, 16);
        assert_eq!(mesh.vertex_count(), 17 * 17);
        assert_eq!(mesh.index_count(), 16 * 16 * 6);
        for p in mesh.positions.chunks(3) {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((r - 0.5).abs() < 1e-5);
        }
        assert!(indices_in_range(&mesh));
    }

    #[test]
    fn cylinder_spans_its_height() {
        let mesh = cylinder(0.02, 1.2, 8);
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.index_count(), 8 * 6);
        let ys: Vec<f32> = mesh.positions.chunks(3).map(|p| p[1]).collect();
        assert!(ys.iter().all(|&y| (y.abs() - 0.6).abs() < 1e-6));
        assert!(indices_in_range(&mesh));
    }

    #[test]
    fn every_shape_builds_a_valid_mesh() {
        for shape in Shape::ALL {
            let mesh = shape.mesh();
            assert!(mesh.index_count() > 0, "{shape:?} is empty");
            assert!(indices_in_range(&mesh), "{shape:?} has stray indices");
        }
    }

    #[test]
    fn plane_faces_up() {
        let mesh = plane(8.0, 8.0);
        assert_eq!(mesh.index_count(), 6);
        assert!(mesh.normals.chunks(3).all(|n| n == [0.0, 1.0, 0.0]));
    }
}
