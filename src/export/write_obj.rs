use std::fmt::Write;

use crate::building::BuildingParams;
use crate::error::{ExportError, Result};
use crate::tessellation::TriangleMesh;

use super::FLOAT_PRECISION;

/// Serializes a building mesh as an OBJ document.
///
/// Layout: a comment header with the generating parameters, one `v` line per
/// vertex, one `vn` line per normal, one `f` line per triangle. Face indices
/// are 1-based and every corner reuses its vertex index as its normal index,
/// e.g. `f 2//2 3//3 5//5`.
///
/// The mesh is written as given; index ranges and normal count are not
/// checked.
pub struct WriteObj<'a> {
    params: &'a BuildingParams,
    mesh: &'a TriangleMesh,
}

impl<'a> WriteObj<'a> {
    /// Creates a new `WriteObj` operation.
    #[must_use]
    pub fn new(params: &'a BuildingParams, mesh: &'a TriangleMesh) -> Self {
        Self { params, mesh }
    }

    /// Executes the serialization, returning the document text.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting into the output buffer fails.
    pub fn execute(&self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out).map_err(ExportError::from)?;

        tracing::debug!(bytes = out.len(), "serialized OBJ document");
        Ok(out)
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        let BuildingParams {
            sides,
            height,
            base_radius,
            top_radius,
        } = self.params;

        writeln!(out, "# building-mesh")?;
        writeln!(out, "# sides: {sides}")?;
        writeln!(out, "# height: {height}")?;
        writeln!(out, "# base radius: {base_radius}")?;
        writeln!(out, "# top radius: {top_radius}")?;

        for v in &self.mesh.vertices {
            writeln!(out, "v {} {} {}", fixed(v.x), fixed(v.y), fixed(v.z))?;
        }

        for n in &self.mesh.normals {
            writeln!(out, "vn {} {} {}", fixed(n.x), fixed(n.y), fixed(n.z))?;
        }

        for face in &self.mesh.indices {
            let [a, b, c] = face.map(|idx| u64::from(idx) + 1);
            writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }

        Ok(())
    }
}

/// Formats `value` with [`FLOAT_PRECISION`] decimals. Negative zero prints
/// as `0.000000`.
fn fixed(value: f64) -> String {
    format!("{:.*}", FLOAT_PRECISION, value + 0.0)
}
