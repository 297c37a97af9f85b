//! HTML file writing for rendered documents.
//!
//! Compression happens in memory; this module only handles file I/O.

use std::fs;
use std::io;
use std::path::Path;

use crate::compress::compress;

/// Write `content` to `path`, creating missing parent directories.
///
/// Existing files are overwritten. Errors are returned as-is, never retried.
pub fn persist(path: &Path, content: impl AsRef<[u8]>) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Compress `html` and write it to `path`.
pub fn write_compressed(path: &Path, html: &str) -> io::Result<()> {
    persist(path, compress(html))
}
