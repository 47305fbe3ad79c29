//! Wavefront OBJ text documents.
//!
//! Only the subset needed for a positioned, normal-carrying triangle mesh is
//! handled: `v`, `vn`, `f` and `#` comments.

mod read_obj;
mod write_obj;

pub use read_obj::ReadObj;
pub use write_obj::WriteObj;

/// Decimal places used for every coordinate written to a document.
pub const FLOAT_PRECISION: usize = 6;
