use crate::tessellation::TriangleMesh;

use super::{BuildingParams, GenerateFaces, GenerateVertices};

/// Creates the triangle mesh of a truncated-cone building.
///
/// The solid stands on the XZ plane with its axis along +Y. Parameters are
/// not validated here; call [`BuildingParams::validate`] first when they
/// come from outside the crate.
///
/// - `top_radius = base_radius` produces a prism
/// - `top_radius = 0` collapses the top ring onto the top center
pub struct MakeBuilding {
    params: BuildingParams,
}

impl MakeBuilding {
    /// Creates a new `MakeBuilding` operation.
    #[must_use]
    pub fn new(params: BuildingParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the mesh with vertex normals.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let vertices = GenerateVertices::new(self.params).execute();
        let faces = GenerateFaces::new(self.params.sides).execute();
        let mesh = TriangleMesh::with_estimated_normals(vertices, faces);

        tracing::debug!(
            sides = self.params.sides,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "generated building mesh"
        );

        mesh
    }
}
