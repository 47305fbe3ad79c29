use crate::math::Point3;
use crate::tessellation::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Computes the axis-aligned bounding box of a mesh.
pub struct BoundingBox<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the AABB, or `None` for a mesh without
    /// vertices.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let (first, rest) = self.mesh.vertices.split_first()?;
        let init = Aabb {
            min: *first,
            max: *first,
        };
        Some(rest.iter().fold(init, |aabb, v| Aabb {
            min: aabb.min.inf(v),
            max: aabb.max.sup(v),
        }))
    }
}
