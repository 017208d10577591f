//! Flattened, GPU-ready buffer streams.

use glam::Vec3;

use crate::mesh::resolve_normals;
use crate::obj::{ObjError, ObjMesh};

/// The three flattened streams a mesh upload consumes.
///
/// Produced once, never mutated afterwards:
///
/// - `vertices` — 6 floats per vertex, position then normal, interleaved;
/// - `colors` — 4 floats per vertex, constant [`Self::DEFAULT_COLOR`];
/// - `indices` — 3 unsigned ints per face, in declared corner order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Interleaved `px py pz nx ny nz` per vertex.
    pub vertices: Vec<f32>,
    /// Flat `r g b a` per vertex.
    pub colors: Vec<f32>,
    /// Flat triangle indices referencing vertex positions.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Floats per interleaved vertex record.
    pub const VERTEX_FLOATS: usize = 6;
    /// Floats per color record.
    pub const COLOR_FLOATS: usize = 4;
    /// Placeholder per-vertex color (opaque red), emitted for every vertex.
    pub const DEFAULT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    /// Flatten parsed geometry and resolved normals into upload streams.
    ///
    /// `normals` must hold one entry per position, as produced by
    /// [`resolve_normals`](crate::mesh::resolve_normals). Normals are
    /// emitted as-is; no normalization happens here.
    pub fn build(mesh: &ObjMesh, normals: &[Vec3]) -> Self {
        debug_assert_eq!(
            normals.len(),
            mesh.positions.len(),
            "one resolved normal per position"
        );

        let mut vertices = Vec::with_capacity(mesh.positions.len() * Self::VERTEX_FLOATS);
        let mut colors = Vec::with_capacity(mesh.positions.len() * Self::COLOR_FLOATS);
        for (position, normal) in mesh.positions.iter().zip(normals) {
            vertices.extend_from_slice(&position.to_array());
            vertices.extend_from_slice(&normal.to_array());
            colors.extend_from_slice(&Self::DEFAULT_COLOR);
        }

        let mut indices = Vec::with_capacity(mesh.faces.len() * 3);
        for face in &mesh.faces {
            indices.extend_from_slice(face);
        }

        Self {
            vertices,
            colors,
            indices,
        }
    }

    /// Parse OBJ text, resolve normals, and flatten in one call.
    pub fn from_obj_text(text: &str) -> Result<Self, ObjError> {
        let mesh = ObjMesh::parse(text)?;
        let normals = resolve_normals(&mesh);
        Ok(Self::build(&mesh, &normals))
    }

    /// Number of vertex records in the interleaved stream.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / Self::VERTEX_FLOATS
    }

    /// Number of indices (3 × face count).
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Interleaved vertex data as bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Color data as bytes.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Index data as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn interleaved_stream_layout() {
        let buffers = MeshBuffers::from_obj_text(TRIANGLE).unwrap();
        assert_eq!(buffers.vertex_count(), 3);
        // Vertex 1: position (1,0,0), computed normal (0,0,1).
        assert_eq!(
            &buffers.vertices[6..12],
            &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0][..]
        );
        assert_eq!(buffers.vertices.len(), 3 * MeshBuffers::VERTEX_FLOATS);
    }

    #[test]
    fn color_stream_is_constant() {
        let buffers = MeshBuffers::from_obj_text(TRIANGLE).unwrap();
        assert_eq!(buffers.colors.len(), 12);
        for group in buffers.colors.chunks(4) {
            assert_eq!(group, &MeshBuffers::DEFAULT_COLOR[..]);
        }
    }

    #[test]
    fn index_stream_keeps_declared_order() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 3 1 4\n";
        let buffers = MeshBuffers::from_obj_text(text).unwrap();
        assert_eq!(buffers.indices, vec![0, 1, 2, 2, 0, 3]);
        assert_eq!(buffers.index_count(), 6);
    }

    #[test]
    fn stream_length_invariants() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n";
        let buffers = MeshBuffers::from_obj_text(text).unwrap();
        assert_eq!(buffers.vertices.len(), 6 * buffers.vertex_count());
        assert_eq!(buffers.colors.len(), 4 * buffers.vertex_count());
        assert_eq!(buffers.indices.len(), 3 * 2);
        assert!(buffers
            .indices
            .iter()
            .all(|&i| (i as usize) < buffers.vertex_count()));
    }

    #[test]
    fn byte_views_match_stream_sizes() {
        let buffers = MeshBuffers::from_obj_text(TRIANGLE).unwrap();
        assert_eq!(buffers.vertex_bytes().len(), buffers.vertices.len() * 4);
        assert_eq!(buffers.color_bytes().len(), buffers.colors.len() * 4);
        assert_eq!(buffers.index_bytes().len(), buffers.indices.len() * 4);
    }

    #[test]
    fn flattening_is_idempotent() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let first = MeshBuffers::from_obj_text(text).unwrap();
        let second = MeshBuffers::from_obj_text(text).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.vertex_bytes(), second.vertex_bytes());
    }

    #[test]
    fn supplied_normals_emitted_as_is() {
        // Non-unit supplied normal must pass through untouched.
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 3\nf 1//1 2//1 3//1\n";
        let buffers = MeshBuffers::from_obj_text(text).unwrap();
        assert_eq!(&buffers.vertices[3..6], &[0.0, 0.0, 3.0][..]);
    }
}
