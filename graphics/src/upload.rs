//! Mesh upload: flattened streams to device buffers.

use amaranth_core::MeshBuffers;

use crate::device::{BufferTarget, GraphicsDevice};
use crate::device::{BufferHandle, VertexArrayHandle};
use crate::error::DeviceError;
use crate::layout::VertexAttribute;

/// Opaque handle bundle for an uploaded mesh.
///
/// Everything a render loop needs to draw: the vertex array carrying the
/// attribute bindings, the three buffers backing it, and the index count
/// for the draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuMesh {
    /// Vertex array object carrying the attribute bindings.
    pub vertex_array: VertexArrayHandle,
    /// Interleaved position+normal buffer.
    pub vertex_buffer: BufferHandle,
    /// Per-vertex color buffer.
    pub color_buffer: BufferHandle,
    /// Triangle index buffer.
    pub index_buffer: BufferHandle,
    /// Number of indices to draw (3 × face count).
    pub index_count: u32,
}

/// Upload flattened streams and describe the fixed binding layout.
///
/// Performs the device operations in a fixed order: vertex array first,
/// then the interleaved buffer with position/normal attributes, then the
/// color buffer, then the index buffer, and finally unbinds so no global
/// binding state dangles.
///
/// Any failure aborts the upload and propagates; device objects created
/// before the failure are not released (the call returns no bundle, so
/// the caller cannot observe them).
pub fn upload_mesh(
    device: &mut dyn GraphicsDevice,
    buffers: &MeshBuffers,
) -> Result<GpuMesh, DeviceError> {
    let vertex_array = device.create_vertex_array()?;
    device.bind_vertex_array(Some(vertex_array));

    let vertex_buffer = device.create_buffer()?;
    device.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
    device.upload(BufferTarget::Array, buffers.vertex_bytes())?;
    let position = VertexAttribute::position();
    device.describe_attribute(&position);
    device.enable_attribute(position.slot);
    let normal = VertexAttribute::normal();
    device.describe_attribute(&normal);
    device.enable_attribute(normal.slot);

    let color_buffer = device.create_buffer()?;
    device.bind_buffer(BufferTarget::Array, Some(color_buffer));
    device.upload(BufferTarget::Array, buffers.color_bytes())?;
    let color = VertexAttribute::color();
    device.describe_attribute(&color);
    device.enable_attribute(color.slot);

    let index_buffer = device.create_buffer()?;
    device.bind_buffer(BufferTarget::ElementArray, Some(index_buffer));
    device.upload(BufferTarget::ElementArray, buffers.index_bytes())?;

    device.bind_buffer(BufferTarget::Array, None);
    device.bind_vertex_array(None);

    log::debug!(
        "uploaded mesh: {} vertices, {} indices",
        buffers.vertex_count(),
        buffers.index_count()
    );

    Ok(GpuMesh {
        vertex_array,
        vertex_buffer,
        color_buffer,
        index_buffer,
        index_count: buffers.index_count() as u32,
    })
}
