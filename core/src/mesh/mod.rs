//! Per-vertex normal resolution and flattened buffer building.

mod buffers;
mod normals;

pub use buffers::MeshBuffers;
pub use normals::resolve_normals;
