use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Procedural mesh shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Axis-aligned box centered on its origin.
    Cuboid { size: Vec3 },
}

/// One vertex of a triangle list: position and face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangles {
    pub vertices: Vec<VertexData>,
    pub indices: Vec<u16>,
}

impl Geometry {
    /// Unit cube.
    pub fn cube() -> Self {
        Geometry::Cuboid { size: Vec3::ONE }
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        match self {
            Geometry::Cuboid { size } => *size,
        }
    }

    /// Build the triangle list. Faces are counter-clockwise seen from
    /// outside, with one normal per face so lighting stays flat.
    pub fn triangles(&self) -> Triangles {
        match self {
            Geometry::Cuboid { size } => cuboid(*size * 0.5),
        }
    }
}

fn cuboid(half: Vec3) -> Triangles {
    let (x, y, z) = (half.x, half.y, half.z);
    let v = |position: [f32; 3], normal: [f32; 3]| VertexData { position, normal };
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        v([-x, -y,  z], [0.0, 0.0, 1.0]),
        v([ x, -y,  z], [0.0, 0.0, 1.0]),
        v([ x,  y,  z], [0.0, 0.0, 1.0]),
        v([-x,  y,  z], [0.0, 0.0, 1.0]),
        // -Z face
        v([ x, -y, -z], [0.0, 0.0, -1.0]),
        v([-x, -y, -z], [0.0, 0.0, -1.0]),
        v([-x,  y, -z], [0.0, 0.0, -1.0]),
        v([ x,  y, -z], [0.0, 0.0, -1.0]),
        // +X face
        v([ x, -y,  z], [1.0, 0.0, 0.0]),
        v([ x, -y, -z], [1.0, 0.0, 0.0]),
        v([ x,  y, -z], [1.0, 0.0, 0.0]),
        v([ x,  y,  z], [1.0, 0.0, 0.0]),
        // -X face
        v([-x, -y, -z], [-1.0, 0.0, 0.0]),
        v([-x, -y,  z], [-1.0, 0.0, 0.0]),
        v([-x,  y,  z], [-1.0, 0.0, 0.0]),
        v([-x,  y, -z], [-1.0, 0.0, 0.0]),
        // +Y face
        v([-x,  y,  z], [0.0, 1.0, 0.0]),
        v([ x,  y,  z], [0.0, 1.0, 0.0]),
        v([ x,  y, -z], [0.0, 1.0, 0.0]),
        v([-x,  y, -z], [0.0, 1.0, 0.0]),
        // -Y face
        v([-x, -y, -z], [0.0, -1.0, 0.0]),
        v([ x, -y, -z], [0.0, -1.0, 0.0]),
        v([ x, -y,  z], [0.0, -1.0, 0.0]),
        v([-x, -y,  z], [0.0, -1.0, 0.0]),
    ];
    let indices = (0..6u16)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b + 2, b + 3, b]
        })
        .collect();
    Triangles { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_quads() {
        let t = Geometry::cube().triangles();
        assert_eq!(t.vertices.len(), 24);
        assert_eq!(t.indices.len(), 36);
        assert!(t.indices.iter().all(|&i| (i as usize) < t.vertices.len()));
    }

    #[test]
    fn cuboid_spans_its_size() {
        let t = Geometry::Cuboid {
            size: Vec3::new(2.0, 4.0, 6.0),
        }
        .triangles();
        let max = t
            .vertices
            .iter()
            .fold(Vec3::splat(f32::MIN), |m, v| m.max(Vec3::from(v.position)));
        assert_eq!(max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn triangles_wind_outward() {
        let t = Geometry::cube().triangles();
        for tri in t.indices.chunks(3) {
            let [a, b, c] =
                [tri[0], tri[1], tri[2]].map(|i| Vec3::from(t.vertices[i as usize].position));
            let face_normal = (b - a).cross(c - a).normalize();
            let declared = Vec3::from(t.vertices[tri[0] as usize].normal);
            assert!(face_normal.dot(declared) > 0.99);
        }
    }
}
