use std::f64::consts::TAU;

use crate::math::Point3;

use super::BuildingParams;

/// Places the vertices of a building.
///
/// Output order: base center, top center, then one base-ring and one
/// top-ring vertex per side. The axis runs along +Y with the base centered
/// on the origin.
pub struct GenerateVertices {
    params: BuildingParams,
}

impl GenerateVertices {
    /// Creates a new `GenerateVertices` operation.
    #[must_use]
    pub fn new(params: BuildingParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning `2 + 2 * sides` points.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let BuildingParams {
            sides,
            height,
            base_radius,
            top_radius,
        } = self.params;

        let mut vertices = Vec::with_capacity(self.params.vertex_count());
        vertices.push(Point3::origin());
        vertices.push(Point3::new(0.0, height, 0.0));

        for i in 0..sides {
            let angle = TAU * f64::from(i) / f64::from(sides);
            let (sin, cos) = angle.sin_cos();
            vertices.push(Point3::new(cos * base_radius, 0.0, sin * base_radius));
            vertices.push(Point3::new(cos * top_radius, height, sin * top_radius));
        }

        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::{base_ring_index, top_ring_index};

    fn close(a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn prism_has_8_vertices() {
        let vertices = GenerateVertices::new(BuildingParams::new(3, 1.0, 1.0, 1.0)).execute();
        assert_eq!(vertices.len(), 8);
    }

    #[test]
    fn centers_come_first() {
        let vertices = GenerateVertices::new(BuildingParams::default()).execute();
        assert_eq!(vertices[0], Point3::origin());
        assert_eq!(vertices[1], Point3::new(0.0, 6.0, 0.0));
    }

    #[test]
    fn rings_interleave() {
        let vertices = GenerateVertices::new(BuildingParams::new(4, 2.0, 1.0, 0.5)).execute();
        assert!(close(&vertices[base_ring_index(0) as usize], &Point3::new(1.0, 0.0, 0.0)));
        assert!(close(&vertices[top_ring_index(0) as usize], &Point3::new(0.5, 2.0, 0.0)));
        assert!(close(&vertices[base_ring_index(1) as usize], &Point3::new(0.0, 0.0, 1.0)));
        assert!(close(&vertices[top_ring_index(1) as usize], &Point3::new(0.0, 2.0, 0.5)));
        assert!(close(&vertices[base_ring_index(2) as usize], &Point3::new(-1.0, 0.0, 0.0)));
        assert!(close(&vertices[top_ring_index(3) as usize], &Point3::new(0.0, 2.0, -0.5)));
    }

    #[test]
    fn ring_points_lie_on_their_circles() {
        let params = BuildingParams::new(13, 3.0, 2.0, 1.5);
        let vertices = GenerateVertices::new(params).execute();
        for i in 0..params.sides {
            let base = vertices[base_ring_index(i) as usize];
            let top = vertices[top_ring_index(i) as usize];
            assert!((base.x.hypot(base.z) - 2.0).abs() < 1e-12);
            assert!((top.x.hypot(top.z) - 1.5).abs() < 1e-12);
            assert!(base.y.abs() < f64::EPSILON);
            assert!((top.y - 3.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn zero_top_radius_collapses_top_ring() {
        let vertices = GenerateVertices::new(BuildingParams::new(4, 2.0, 1.0, 0.0)).execute();
        assert_eq!(vertices.len(), 10);
        for i in 0..4 {
            assert_eq!(vertices[top_ring_index(i) as usize], Point3::new(0.0, 2.0, 0.0));
        }
    }

    #[test]
    fn repeated_generation_is_bit_identical() {
        let params = BuildingParams::new(29, 4.25, 1.75, 0.3);
        let a = GenerateVertices::new(params).execute();
        let b = GenerateVertices::new(params).execute();
        assert_eq!(a, b);
    }
}
