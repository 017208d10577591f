//! Wavefront OBJ subset parsing.
//!
//! Only the subset needed for static triangle meshes is supported:
//! `v` positions, `vn` normals, and triangular `f` faces with
//! `v[/vt][/vn]` corner indices. Materials, groups, smoothing groups,
//! texture coordinate data, and n-gons are out of scope; unrecognized
//! keywords are skipped.

mod error;
mod parser;

pub use error::ObjError;
pub use parser::{FaceCorner, ObjMesh};
