//! Rendered documents and their write step.
//!
//! A [`Document`] is the output of a page renderer: the routed URL plus the
//! final HTML. Writing it compresses the HTML and persists it under the
//! destination root.
//!
//! # Example
//!
//! ```ignore
//! let post = Document::post("/2014/01/02/hello/", rendered);
//! let path = post.write(Path::new("_site"))?; // _site/2014/01/02/hello/index.html
//! ```

mod kind;
mod write;

pub use kind::DocumentKind;
pub use write::{persist, write_compressed};

use std::io;
use std::path::{Path, PathBuf};

/// File written for directory-style URLs (`/about/`).
pub const INDEX_FILE: &str = "index.html";

/// A fully rendered page or post.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    /// Site URL, already routed (`/about/`, `/feed.html`).
    pub url: String,
    /// Rendered HTML.
    pub output: String,
}

impl Document {
    pub fn new(kind: DocumentKind, url: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            output: output.into(),
        }
    }

    pub fn page(url: impl Into<String>, output: impl Into<String>) -> Self {
        Self::new(DocumentKind::Page, url, output)
    }

    pub fn post(url: impl Into<String>, output: impl Into<String>) -> Self {
        Self::new(DocumentKind::Post, url, output)
    }

    /// Output file for this document under `dest`.
    pub fn destination(&self, dest: &Path) -> PathBuf {
        url_to_output_path(&self.url, dest)
    }

    /// Compress the output and write it under `dest`.
    ///
    /// Returns the path written.
    pub fn write(&self, dest: &Path) -> io::Result<PathBuf> {
        let path = self.destination(dest);
        write_compressed(&path, &self.output)?;
        Ok(path)
    }
}

/// `/about/` -> `{dest}/about/index.html`, `/a/b.html` -> `{dest}/a/b.html`
fn url_to_output_path(url: &str, dest: &Path) -> PathBuf {
    let relative = url.trim_start_matches('/');
    let path = dest.join(relative);
    if relative.is_empty() || relative.ends_with('/') {
        path.join(INDEX_FILE)
    } else {
        path
    }
}
