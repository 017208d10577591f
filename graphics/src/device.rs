//! Graphics device abstraction.
//!
//! Mesh upload needs a narrow capability set from the device: create
//! buffers and vertex arrays, bind them, upload bytes, and describe
//! attribute bindings. [`GraphicsDevice`] captures exactly that, so the
//! geometry pipeline stays unit-testable without a graphics context and a
//! real binding (OpenGL, for instance) only has to implement seven
//! methods.

use crate::error::DeviceError;
use crate::layout::VertexAttribute;

/// Handle to a device-side vertex array object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayHandle(u64);

impl VertexArrayHandle {
    /// Wrap a backend-assigned identifier.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The backend-assigned identifier.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Handle to a device-side buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(u64);

impl BufferHandle {
    /// Wrap a backend-assigned identifier.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The backend-assigned identifier.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Binding target for a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attribute data.
    Array,
    /// Triangle index data.
    ElementArray,
}

/// The device capabilities mesh upload relies on.
///
/// The binding model is stateful, mirroring the contract the rendering
/// pipeline consumes: uploads and attribute descriptions apply to the
/// currently bound buffer, attribute descriptions are captured by the
/// currently bound vertex array. Binding `None` unbinds.
///
/// Allocation and upload failures are fatal; implementations must not
/// retry. Objects created before a failure are not released — the caller
/// abandons the whole upload.
pub trait GraphicsDevice {
    /// Allocate a vertex array object.
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle, DeviceError>;

    /// Bind a vertex array as current, or unbind with `None`.
    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>);

    /// Allocate a buffer.
    fn create_buffer(&mut self) -> Result<BufferHandle, DeviceError>;

    /// Bind a buffer to a target, or unbind the target with `None`.
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>);

    /// Upload data to the buffer bound at `target`.
    fn upload(&mut self, target: BufferTarget, data: &[u8]) -> Result<(), DeviceError>;

    /// Describe an attribute binding over the buffer bound at
    /// [`BufferTarget::Array`], recorded into the bound vertex array.
    fn describe_attribute(&mut self, attribute: &VertexAttribute);

    /// Enable the attribute slot in the bound vertex array.
    fn enable_attribute(&mut self, slot: u32);
}
