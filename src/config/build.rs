//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "_site"              # Rendered site to compress (relative to config file)
//! output = "public"             # Where the compressed copy is written
//! minify = true                 # Collapse whitespace in HTML (false: copy as-is)
//! extensions = ["html", "htm"]  # Files treated as HTML
//! exclude = ['\.min\.html$']    # Regexes matched against source-relative paths
//! ```

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ConfigDiagnostics;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Rendered site directory.
    pub source: PathBuf,

    /// Output directory for the compressed copy.
    pub output: PathBuf,

    /// Collapse whitespace in HTML files.
    pub minify: bool,

    /// Extensions (without dot) of files treated as HTML.
    pub extensions: Vec<String>,

    /// Regex patterns of source-relative paths to copy without compressing.
    pub exclude: Vec<String>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            source: "_site".into(),
            output: "public".into(),
            minify: true,
            extensions: vec!["html".into(), "htm".into()],
            exclude: Vec::new(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate build configuration.
    ///
    /// Expects `source` and `output` to be already resolved.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.error_with_hint(
                "build.extensions",
                "no HTML extensions configured",
                "use `extensions = [\"html\"]` or remove the field",
            );
        }

        for pattern in &self.exclude {
            if let Err(e) = regex::Regex::new(pattern) {
                diag.error_with_hint(
                    "build.exclude",
                    format!("invalid pattern `{pattern}`"),
                    e.to_string(),
                );
            }
        }

        if !self.source.is_dir() {
            diag.error(
                "build.source",
                format!("directory '{}' not found", self.source.display()),
            );
        }

        if self.source == self.output {
            diag.error("build.output", "output must differ from source");
        } else if self.output.starts_with(&self.source) {
            diag.error_with_hint(
                "build.output",
                "output must not be inside source",
                "the build would read its own output",
            );
        }
    }

    /// Whether `path` (relative to source) is a compressible HTML file.
    pub fn is_html(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Compile `exclude` into a single matcher.
    pub fn exclude_set(&self) -> Result<RegexSet, regex::Error> {
        RegexSet::new(&self.exclude)
    }
}
