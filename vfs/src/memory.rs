use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::VfsError;
use crate::provider::ResourceProvider;

/// In-memory resource provider for tests and embedded assets.
///
/// Thread-safe and mutable even after being handed to a loader.
///
/// # Example
///
/// ```ignore
/// let mem = MemoryProvider::new();
/// mem.insert("models/triangle.obj", obj_bytes);
///
/// let mesh = load_obj(&mut device, &mem, "models/triangle.obj")?;
/// ```
#[derive(Clone, Default)]
pub struct MemoryProvider {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryProvider {
    /// Create an empty in-memory provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource at the given path.
    ///
    /// The path should use forward slashes and have no leading slash.
    /// Overwrites any existing resource at the same path.
    pub fn insert(&self, path: impl Into<String>, data: Vec<u8>) {
        self.files.write().unwrap().insert(path.into(), data);
    }

    /// Remove a resource at the given path, returning its data if it existed.
    pub fn remove(&self, path: &str) -> Option<Vec<u8>> {
        self.files.write().unwrap().remove(path)
    }
}

impl ResourceProvider for MemoryProvider {
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let map = self.files.read().unwrap();
        map.get(path)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(path.to_owned()))
    }

    fn exists(&self, path: &str) -> Result<bool, VfsError> {
        Ok(self.files.read().unwrap().contains_key(path))
    }
}
