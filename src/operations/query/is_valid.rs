use crate::math::{length, Vector3, UNIT_TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Validates that a mesh has the shape a building with `sides` sides must
/// have.
///
/// Checks vertex, face and normal counts, face index ranges, and that every
/// normal is unit length or exactly zero.
pub struct IsValid<'a> {
    mesh: &'a TriangleMesh,
    sides: u32,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh, sides: u32) -> Self {
        Self { mesh, sides }
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mesh = self.mesh;
        let vertex_count = 2 + 2 * self.sides as usize;
        let face_count = 4 * self.sides as usize;

        if mesh.vertex_count() != vertex_count {
            tracing::debug!(
                expected = vertex_count,
                actual = mesh.vertex_count(),
                "vertex count mismatch"
            );
            return false;
        }
        if mesh.triangle_count() != face_count {
            tracing::debug!(
                expected = face_count,
                actual = mesh.triangle_count(),
                "face count mismatch"
            );
            return false;
        }
        if mesh.normals.len() != mesh.vertex_count() {
            tracing::debug!(normals = mesh.normals.len(), "normal count mismatch");
            return false;
        }

        let in_range = mesh
            .indices
            .iter()
            .flatten()
            .all(|&idx| (idx as usize) < mesh.vertex_count());
        if !in_range {
            tracing::debug!("face index out of range");
            return false;
        }

        mesh.normals.iter().all(|n| {
            *n == Vector3::zeros() || (length(n) - 1.0).abs() < UNIT_TOLERANCE
        })
    }
}
