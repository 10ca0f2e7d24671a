/// Geometry primitives for the shaded cube
use crate::error::GeometryError;
use nalgebra::Point3;

/// Corners of the cube in object space, centred on the origin.
pub const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// The six quads of the cube. Vertices `a` and `c` are always diagonal.
pub const CUBE_FACES: [Face; 6] = [
    Face::new(0, 1, 2, 3),
    Face::new(5, 4, 7, 6),
    Face::new(4, 0, 3, 7),
    Face::new(1, 5, 6, 2),
    Face::new(4, 5, 1, 0),
    Face::new(3, 2, 6, 7),
];

/// A planar quadrilateral defined by four vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 4],
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self {
            indices: [a, b, c, d],
        }
    }

    /// Look up the four corners of this face in `points`.
    pub fn corners(&self, points: &[Point3<f64>]) -> [Point3<f64>; 4] {
        self.indices.map(|i| points[i])
    }

    /// Mean z-coordinate of the four corners, used as the depth sort key.
    pub fn average_z(&self, points: &[Point3<f64>]) -> f64 {
        self.indices.iter().map(|&i| points[i].z).sum::<f64>() / 4.0
    }

    /// Midpoint of the diagonal from corner `a` to corner `c`.
    ///
    /// For a cube centred on the origin this is the face centre, which
    /// points outward along the face normal and stands in for it when
    /// lighting.
    pub fn normal_proxy(&self, points: &[Point3<f64>]) -> Point3<f64> {
        let a = points[self.indices[0]];
        let c = points[self.indices[2]];
        nalgebra::center(&a, &c)
    }
}

/// A quad mesh: a vertex list plus faces indexing into it
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, checking that every face names four distinct,
    /// in-range vertices.
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Face>) -> Result<Self, GeometryError> {
        for (face_index, face) in faces.iter().enumerate() {
            for (slot, &index) in face.indices.iter().enumerate() {
                if index >= vertices.len() {
                    return Err(GeometryError::VertexOutOfRange {
                        face: face_index,
                        index,
                        count: vertices.len(),
                    });
                }
                if face.indices[..slot].contains(&index) {
                    return Err(GeometryError::DuplicateVertex {
                        face: face_index,
                        index,
                    });
                }
            }
        }

        Ok(Self { vertices, faces })
    }

    /// The fixed 2×2×2 cube rendered by the application.
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES
                .iter()
                .map(|&[x, y, z]| Point3::new(x, y, z))
                .collect(),
            faces: CUBE_FACES.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::cube()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 6);

        // The fixed cube passes the same validation as any other mesh
        let rebuilt = Mesh::new(cube.vertices().to_vec(), cube.faces().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_every_vertex_shared_by_three_faces() {
        let mut uses = [0usize; 8];
        for face in CUBE_FACES.iter() {
            for &i in &face.indices {
                uses[i] += 1;
            }
        }
        assert_eq!(uses, [3; 8]);
    }

    #[test]
    fn test_normal_proxy_is_face_centre() {
        let cube = Mesh::cube();
        let points = cube.vertices();

        let front = CUBE_FACES[0].normal_proxy(points);
        assert!((front - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-12);

        let right = CUBE_FACES[3].normal_proxy(points);
        assert!((right - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_average_z() {
        let cube = Mesh::cube();
        assert_eq!(CUBE_FACES[0].average_z(cube.vertices()), -1.0);
        assert_eq!(CUBE_FACES[1].average_z(cube.vertices()), 1.0);
        assert_eq!(CUBE_FACES[2].average_z(cube.vertices()), 0.0);
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let vertices = vec![Point3::origin(); 4];
        let err = Mesh::new(vertices, vec![Face::new(0, 1, 2, 4)]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::VertexOutOfRange {
                face: 0,
                index: 4,
                count: 4
            }
        );
    }

    #[test]
    fn test_rejects_repeated_index() {
        let vertices = vec![Point3::origin(); 4];
        let err = Mesh::new(vertices, vec![Face::new(0, 1, 1, 3)]).unwrap_err();
        assert_eq!(err, GeometryError::DuplicateVertex { face: 0, index: 1 });
    }
}
