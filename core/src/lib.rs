//! # Amaranth Core
//!
//! GPU-agnostic mesh geometry: a Wavefront OBJ subset parser, per-vertex
//! normal resolution, and flattened buffer building. Everything in this
//! crate is plain data — uploading the results to a graphics device lives
//! in `amaranth-graphics`.
//!
//! Data flows strictly forward:
//!
//! ```text
//! ObjMesh::parse → resolve_normals → MeshBuffers::build
//! ```

pub mod mesh;
pub mod obj;

pub use mesh::{resolve_normals, MeshBuffers};
pub use obj::{FaceCorner, ObjError, ObjMesh};
