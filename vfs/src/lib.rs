//! Named-resource access for the Amaranth mesh loader.
//!
//! Mesh construction only needs one capability from the outside world:
//! "give me the bytes of the resource with this name". This crate models
//! that capability as the [`ResourceProvider`] trait so the geometry code
//! never touches the filesystem directly and tests can substitute
//! in-memory fixtures.
//!
//! All operations are synchronous; mesh construction is a single blocking
//! call and providers are queried inline.
//!
//! # Providers
//!
//! - [`MemoryProvider`] — In-memory storage for tests and embedded assets
//! - [`FileSystemProvider`] — Native filesystem access rooted at a directory
//!
//! Custom providers can implement [`ResourceProvider`] for packed archives
//! or other storage backends.

mod error;
mod filesystem;
mod memory;
pub mod path;
mod provider;

pub use error::VfsError;
pub use filesystem::FileSystemProvider;
pub use memory::MemoryProvider;
pub use provider::ResourceProvider;
