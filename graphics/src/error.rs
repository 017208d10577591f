//! Device error types.

use thiserror::Error;

/// Errors a graphics device can report during mesh upload.
///
/// All variants are fatal for the upload that triggered them. Device
/// objects created earlier in the same call are not rolled back; the
/// caller holds no valid handle bundle after a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("failed to create vertex array: {0}")]
    VertexArrayCreationFailed(String),
    #[error("failed to create buffer: {0}")]
    BufferCreationFailed(String),
    #[error("failed to upload buffer data: {0}")]
    UploadFailed(String),
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("GPU device lost")]
    DeviceLost,
}
