//! # Amaranth Graphics
//!
//! Device abstraction and mesh upload for the Amaranth mesh loader.
//!
//! This crate provides:
//! - [`GraphicsDevice`] - Narrow trait for the buffer/vertex-array
//!   capabilities mesh upload needs
//! - [`VertexAttribute`] - The fixed binding layout the rendering
//!   pipeline consumes
//! - [`upload_mesh`] / [`load_obj`] - Upload flattened streams and the
//!   end-to-end resource-to-handle-bundle call
//! - [`DummyDevice`] - Command-recording device for tests and headless use
//!
//! ## Example
//!
//! ```ignore
//! use amaranth_graphics::{load_obj, DummyDevice};
//! use amaranth_vfs::MemoryProvider;
//!
//! let provider = MemoryProvider::new();
//! provider.insert("teapot.obj", obj_bytes);
//!
//! let mut device = DummyDevice::new();
//! let mesh = load_obj(&mut device, &provider, "teapot.obj")?;
//! // mesh.index_count is the draw count for the render loop.
//! ```

mod device;
mod dummy;
mod error;
mod layout;
mod loader;
mod upload;

pub use device::{BufferHandle, BufferTarget, GraphicsDevice, VertexArrayHandle};
pub use dummy::{Command, DummyDevice};
pub use error::DeviceError;
pub use layout::{VertexAttribute, VertexAttributeFormat, COLOR_SLOT, NORMAL_SLOT, POSITION_SLOT};
pub use loader::{load_obj, MeshLoadError};
pub use upload::{upload_mesh, GpuMesh};
