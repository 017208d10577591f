use std::path::PathBuf;

use crate::error::VfsError;
use crate::path::normalize;
use crate::provider::ResourceProvider;

/// File system resource provider for reading assets on disk.
///
/// The root path is joined with the resource path to form the actual
/// filesystem path. Paths are normalized first, which rejects `..`
/// segments before they reach the filesystem.
///
/// # Example
///
/// ```ignore
/// let assets = FileSystemProvider::new("./assets");
/// // Reads ./assets/models/teapot.obj
/// let bytes = assets.read("models/teapot.obj")?;
/// ```
pub struct FileSystemProvider {
    root: PathBuf,
}

impl FileSystemProvider {
    /// Create a provider rooted at the given directory.
    ///
    /// The directory does not need to exist yet — it is checked at read time.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a resource path to a full filesystem path.
    fn resolve(&self, path: &str) -> Result<PathBuf, VfsError> {
        Ok(self.root.join(normalize(path)?))
    }
}

impl ResourceProvider for FileSystemProvider {
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let full_path = self.resolve(path)?;
        log::trace!("reading resource {}", full_path.display());
        Ok(std::fs::read(full_path)?)
    }

    fn exists(&self, path: &str) -> Result<bool, VfsError> {
        Ok(self.resolve(path)?.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("amaranth_vfs_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn read_existing_file() {
        let dir = temp_dir("read");
        std::fs::write(dir.join("test.obj"), b"v 1 2 3").unwrap();

        let provider = FileSystemProvider::new(&dir);
        let data = provider.read("test.obj").unwrap();
        assert_eq!(data, b"v 1 2 3");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_missing_file() {
        let dir = temp_dir("read_missing");
        let provider = FileSystemProvider::new(&dir);
        assert!(matches!(
            provider.read("nope.obj"),
            Err(VfsError::NotFound(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn exists_check() {
        let dir = temp_dir("exists");
        std::fs::write(dir.join("file.obj"), b"").unwrap();

        let provider = FileSystemProvider::new(&dir);
        assert!(provider.exists("file.obj").unwrap());
        assert!(!provider.exists("nope.obj").unwrap());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn reject_traversal() {
        let dir = temp_dir("traversal");
        let provider = FileSystemProvider::new(&dir);
        assert!(matches!(
            provider.read("../secret.obj"),
            Err(VfsError::InvalidPath(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
