//! Filesystem abstraction
//!
//! The checks read template files through the [`FileSystem`] trait so they can
//! be unit tested against [`MockFileSystem`] without touching disk. Traversal
//! itself lives in the scanner and is tested against real temp directories.

mod mock;
mod real;

pub use mock::MockFileSystem;
pub use real::RealFileSystem;

use anyhow::Result;
use std::path::Path;

/// Abstraction over the read-only file access the checks perform
pub trait FileSystem: Send + Sync {
    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
