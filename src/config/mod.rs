//! Configuration for `presshtml.toml`.
//!
//! The file is optional: without it every field takes its default and
//! paths resolve against the current directory.
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[build]` | Source/output dirs, extensions, exclude patterns |

mod build;
mod error;
mod util;

pub use build::BuildSectionConfig;
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use util::{find_config_file, resolve_path};

use crate::{
    cli::{BuildArgs, Cli},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing presshtml.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the `build` command.
    ///
    /// Searches upward from cwd for the config file, applies CLI overrides,
    /// resolves paths and validates.
    pub fn load(cli: &Cli, args: &BuildArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd.clone(),
                ..Self::default()
            },
        };

        config.apply_build_args(args, &cwd);
        config.normalize_paths();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI overrides. CLI paths are relative to cwd, not the config file.
    fn apply_build_args(&mut self, args: &BuildArgs, cwd: &Path) {
        if let Some(source) = &args.source {
            self.build.source = cwd.join(source);
        }
        if let Some(output) = &args.output {
            self.build.output = cwd.join(output);
        }
        if let Some(minify) = args.minify {
            self.build.minify = minify;
        }
    }

    /// Resolve `source` and `output` against the root.
    fn normalize_paths(&mut self) {
        self.build.source = resolve_path(&self.build.source, &self.root);
        self.build.output = resolve_path(&self.build.output, &self.root);
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        diag.into_result()?;
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
