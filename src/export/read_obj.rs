use crate::error::{ExportError, Result};
use crate::math::{Point3, Vector3};
use crate::tessellation::{EstimateNormals, Face, TriangleMesh};

/// Parses an OBJ document back into a [`TriangleMesh`].
///
/// Accepts what [`WriteObj`](super::WriteObj) emits: `v` and `vn` records with
/// three coordinates, and triangular `f` records whose corners are either
/// `v` or `v//vn` with matching indices. Comments and blank lines are
/// skipped, as are other record kinds. If the document has no `vn` records
/// the normals are estimated from the faces.
pub struct ReadObj<'a> {
    source: &'a str,
}

impl<'a> ReadObj<'a> {
    /// Creates a new `ReadObj` operation.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Executes the parse.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Parse`] with the 1-based line number for
    /// malformed records, faces that are not triangles, out-of-range or
    /// mismatched indices, and a normal count that differs from the vertex
    /// count.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut vertices = Vec::new();
        let mut normals = Vec::new();
        let mut indices = Vec::new();

        for (line_idx, raw) in self.source.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let [x, y, z] = parse_triple(parts, line_no)?;
                    vertices.push(Point3::new(x, y, z));
                }
                Some("vn") => {
                    let [x, y, z] = parse_triple(parts, line_no)?;
                    normals.push(Vector3::new(x, y, z));
                }
                Some("f") => {
                    let face = parse_face(parts, vertices.len(), line_no)?;
                    indices.push(face);
                }
                _ => {}
            }
        }

        if normals.is_empty() {
            normals = EstimateNormals::new(&vertices, &indices).execute();
        } else if normals.len() != vertices.len() {
            return Err(ExportError::Parse {
                line: self.source.lines().count(),
                message: format!(
                    "{} normals for {} vertices",
                    normals.len(),
                    vertices.len()
                ),
            }
            .into());
        }

        tracing::debug!(
            vertices = vertices.len(),
            triangles = indices.len(),
            "parsed OBJ document"
        );

        Ok(TriangleMesh {
            vertices,
            normals,
            indices,
        })
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> ExportError {
    ExportError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_triple<'s>(
    mut parts: impl Iterator<Item = &'s str>,
    line: usize,
) -> std::result::Result<[f64; 3], ExportError> {
    let mut out = [0.0; 3];
    for slot in &mut out {
        let token = parts
            .next()
            .ok_or_else(|| parse_error(line, "expected three coordinates"))?;
        *slot = token
            .parse()
            .map_err(|_| parse_error(line, format!("invalid number `{token}`")))?;
    }
    Ok(out)
}

fn parse_face<'s>(
    parts: impl Iterator<Item = &'s str>,
    vertex_count: usize,
    line: usize,
) -> std::result::Result<Face, ExportError> {
    let corners = parts
        .map(|token| parse_corner(token, vertex_count, line))
        .collect::<std::result::Result<Vec<u32>, _>>()?;

    <Face>::try_from(corners.as_slice())
        .map_err(|_| parse_error(line, format!("expected 3 corners, got {}", corners.len())))
}

/// Parses `v` or `v//vn` into a 0-based vertex index.
fn parse_corner(
    token: &str,
    vertex_count: usize,
    line: usize,
) -> std::result::Result<u32, ExportError> {
    let (vertex, normal) = match token.split_once("//") {
        Some((v, n)) => (v, Some(n)),
        None => (token, None),
    };

    let index = parse_index(vertex, line)?;
    if let Some(normal) = normal {
        if parse_index(normal, line)? != index {
            return Err(parse_error(
                line,
                format!("corner `{token}` uses a different normal index"),
            ));
        }
    }

    if index == 0 || index as usize > vertex_count {
        return Err(parse_error(
            line,
            format!("vertex index {index} out of range 1..={vertex_count}"),
        ));
    }
    Ok(index - 1)
}

fn parse_index(token: &str, line: usize) -> std::result::Result<u32, ExportError> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid index `{token}`")))
}
