//! End-to-end mesh construction from a named resource.

use amaranth_core::{resolve_normals, MeshBuffers, ObjError, ObjMesh};
use amaranth_vfs::{ResourceProvider, VfsError};
use thiserror::Error;

use crate::device::GraphicsDevice;
use crate::error::DeviceError;
use crate::upload::{upload_mesh, GpuMesh};

/// Errors from the whole resource-to-handle-bundle pipeline.
#[derive(Error, Debug)]
pub enum MeshLoadError {
    #[error("failed to read resource: {0}")]
    Resource(#[from] VfsError),
    #[error("resource is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
    #[error("failed to parse OBJ: {0}")]
    Parse(#[from] ObjError),
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Build a GPU mesh from a named OBJ resource.
///
/// Runs the whole pipeline synchronously: read the resource, parse,
/// resolve normals, flatten, upload. The call is all-or-nothing — on any
/// failure it propagates the error and returns no handle bundle. Each
/// call is independent and allocates fresh device objects.
pub fn load_obj(
    device: &mut dyn GraphicsDevice,
    provider: &dyn ResourceProvider,
    name: &str,
) -> Result<GpuMesh, MeshLoadError> {
    let bytes = provider.read(name)?;
    let text = std::str::from_utf8(&bytes)?;

    let mesh = ObjMesh::parse(text)?;
    let normals = resolve_normals(&mesh);
    let buffers = MeshBuffers::build(&mesh, &normals);

    log::debug!(
        "loaded '{}': {} vertices, {} indices",
        name,
        buffers.vertex_count(),
        buffers.index_count()
    );

    Ok(upload_mesh(device, &buffers)?)
}
