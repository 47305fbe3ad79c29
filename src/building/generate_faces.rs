use crate::tessellation::Face;

use super::{base_ring_index, top_ring_index, BASE_CENTER, TOP_CENTER};

/// Builds the triangle topology of a building from its side count alone.
///
/// Faces are emitted as all bottom-cap triangles, then all top-cap
/// triangles, then two wall triangles per ring segment. The last segment
/// wraps back to ring index 0.
///
/// The bottom cap fans out from [`TOP_CENTER`] while walking the base ring,
/// and the top cap fans out from [`BASE_CENTER`] while walking the top ring.
pub struct GenerateFaces {
    sides: u32,
}

impl GenerateFaces {
    /// Creates a new `GenerateFaces` operation.
    #[must_use]
    pub fn new(sides: u32) -> Self {
        Self { sides }
    }

    /// Executes the operation, returning `4 * sides` triangles.
    #[must_use]
    pub fn execute(&self) -> Vec<Face> {
        let sides = self.sides;
        let mut faces = Vec::with_capacity(4 * sides as usize);
        let next = |i: u32| (i + 1) % sides;

        for i in 0..sides {
            faces.push([TOP_CENTER, base_ring_index(next(i)), base_ring_index(i)]);
        }

        for i in 0..sides {
            faces.push([BASE_CENTER, top_ring_index(i), top_ring_index(next(i))]);
        }

        for i in 0..sides {
            let current_base = base_ring_index(i);
            let current_top = top_ring_index(i);
            let next_base = base_ring_index(next(i));
            let next_top = top_ring_index(next(i));

            faces.push([current_base, current_top, next_top]);
            faces.push([current_base, next_top, next_base]);
        }

        faces
    }
}
