use crate::math::{add, cross, normalize, subtract, Point3, Vector3};

use super::Face;

/// Unit normal of the triangle `(a, b, c)`, following the right-hand rule
/// on `(b - a) x (c - a)`. Collinear points give the zero vector.
#[must_use]
pub fn face_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    let edge1 = subtract(&b.coords, &a.coords);
    let edge2 = subtract(&c.coords, &a.coords);
    normalize(&cross(&edge1, &edge2))
}

/// Estimates per-vertex normals by averaging the unit normals of incident
/// faces.
///
/// Every face contributes with equal weight regardless of area or corner
/// angle. A vertex whose contributions sum to exactly zero, or that no face
/// touches, receives the zero vector.
pub struct EstimateNormals<'a> {
    vertices: &'a [Point3],
    faces: &'a [Face],
}

impl<'a> EstimateNormals<'a> {
    /// Creates a new `EstimateNormals` operation.
    ///
    /// Every index in `faces` must be in range for `vertices`.
    #[must_use]
    pub fn new(vertices: &'a [Point3], faces: &'a [Face]) -> Self {
        Self { vertices, faces }
    }

    /// Executes the estimation, returning one normal per vertex.
    #[must_use]
    pub fn execute(&self) -> Vec<Vector3> {
        let mut sums = vec![Vector3::zeros(); self.vertices.len()];

        for face in self.faces {
            let [a, b, c] = face.map(|idx| idx as usize);
            let normal = face_normal(&self.vertices[a], &self.vertices[b], &self.vertices[c]);
            for idx in [a, b, c] {
                sums[idx] = add(&sums[idx], &normal);
            }
        }

        sums.iter()
            .enumerate()
            .map(|(idx, sum)| {
                let normal = normalize(sum);
                if normal == Vector3::zeros() {
                    tracing::warn!(vertex = idx, "vertex normal is degenerate, using zero vector");
                }
                normal
            })
            .collect()
    }
}
