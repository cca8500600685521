//! Filesystem access for templates, rendered configuration and scaffolding.

use std::io;
use std::path::Path;

/// Port for the handful of file operations the bootstrappers need.
pub trait Filesystem {
    /// Read a file as raw bytes. Templates need not be UTF-8.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write content, truncating any existing file and creating parent
    /// directories as needed.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;
}
