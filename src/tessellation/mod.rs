mod estimate_normals;

pub use estimate_normals::{face_normal, EstimateNormals};

use crate::math::{Point3, Vector3};

/// Three vertex indices forming one triangle, counter-clockwise seen from
/// the side its normal points to.
pub type Face = [u32; 3];

/// A triangle mesh with one normal per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, indexed like `vertices`.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<Face>,
}

impl TriangleMesh {
    /// Creates a mesh from positions and triangles, estimating the normals.
    #[must_use]
    pub fn with_estimated_normals(vertices: Vec<Point3>, indices: Vec<Face>) -> Self {
        let normals = EstimateNormals::new(&vertices, &indices).execute();
        Self {
            vertices,
            normals,
            indices,
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}
