use crate::VfsError;

/// Trait for named-resource backends.
///
/// Providers implement synchronous byte-level reads. The mesh loader holds
/// a `&dyn ResourceProvider` and never cares where the bytes come from.
///
/// # Path Contract
///
/// Paths use forward slashes and are relative to the provider's root.
/// Providers are expected to reject traversal outside their root; see
/// [`path::normalize`](crate::path::normalize).
pub trait ResourceProvider: Send + Sync {
    /// Read the entire contents of the resource at the given path.
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError>;

    /// Check whether a resource exists at the given path.
    fn exists(&self, path: &str) -> Result<bool, VfsError>;
}
