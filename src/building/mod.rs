mod generate_faces;
mod generate_vertices;
mod make_building;

pub use generate_faces::GenerateFaces;
pub use generate_vertices::GenerateVertices;
pub use make_building::MakeBuilding;

use crate::error::ParameterError;

/// Smallest accepted side count.
pub const SIDES_MIN: u32 = 3;

/// Largest accepted side count.
pub const SIDES_MAX: u32 = 36;

/// Index of the base-center vertex.
pub const BASE_CENTER: u32 = 0;

/// Index of the top-center vertex.
pub const TOP_CENTER: u32 = 1;

/// Index of the `i`-th base-ring vertex.
#[inline]
#[must_use]
pub fn base_ring_index(i: u32) -> u32 {
    2 + 2 * i
}

/// Index of the `i`-th top-ring vertex.
#[inline]
#[must_use]
pub fn top_ring_index(i: u32) -> u32 {
    3 + 2 * i
}

/// Parameters that fully determine a building mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingParams {
    /// Number of polygon sides around the axis.
    pub sides: u32,
    /// Distance between the base and top planes along +Y.
    pub height: f64,
    /// Circumradius of the base ring.
    pub base_radius: f64,
    /// Circumradius of the top ring.
    pub top_radius: f64,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            sides: 8,
            height: 6.0,
            base_radius: 1.0,
            top_radius: 0.8,
        }
    }
}

impl BuildingParams {
    /// Creates a new parameter set. No validation is performed.
    #[must_use]
    pub fn new(sides: u32, height: f64, base_radius: f64, top_radius: f64) -> Self {
        Self {
            sides,
            height,
            base_radius,
            top_radius,
        }
    }

    /// Number of vertices a mesh with these parameters has.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        2 + 2 * self.sides as usize
    }

    /// Number of triangles a mesh with these parameters has.
    #[must_use]
    pub fn face_count(&self) -> usize {
        4 * self.sides as usize
    }

    /// Checks the accepted ranges: `sides` in `[SIDES_MIN, SIDES_MAX]`, all
    /// lengths finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(SIDES_MIN..=SIDES_MAX).contains(&self.sides) {
            return Err(ParameterError::SidesOutOfRange {
                value: self.sides,
                min: SIDES_MIN,
                max: SIDES_MAX,
            });
        }
        for (parameter, value) in [
            ("height", self.height),
            ("base radius", self.base_radius),
            ("top radius", self.top_radius),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { parameter, value });
            }
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { parameter, value });
            }
        }
        Ok(())
    }

    /// File name that embeds all four parameters, e.g.
    /// `building_8_6_1_0.8.obj`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "building_{}_{}_{}_{}.obj",
            self.sides, self.height, self.base_radius, self.top_radius
        )
    }
}
