//! Site build: compress a rendered site tree into the output directory.
//!
//! HTML files are compressed and written to the mirrored path under the
//! output root; every other file is copied byte for byte. Files are
//! independent, so they are processed in parallel.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use jwalk::WalkDir;
use rayon::prelude::*;
use regex::RegexSet;
use thiserror::Error;

use crate::config::{BuildSectionConfig, SiteConfig};
use crate::compress::compress;
use crate::document::{DocumentKind, persist};
use crate::logger::ProgressLine;
use crate::{debug, log};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Per-file build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happens to a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Compress,
    Copy,
}

/// Totals reported after a build.
#[derive(Debug, Default)]
pub struct BuildStats {
    pub compressed: AtomicUsize,
    pub posts: AtomicUsize,
    pub copied: AtomicUsize,
    /// HTML bytes before compression.
    pub bytes_in: AtomicU64,
    /// HTML bytes after compression.
    pub bytes_out: AtomicU64,
}

impl BuildStats {
    pub fn saved(&self) -> u64 {
        self.bytes_in
            .load(Ordering::Relaxed)
            .saturating_sub(self.bytes_out.load(Ordering::Relaxed))
    }

    fn record_html(&self, kind: DocumentKind, before: usize, after: usize) {
        self.compressed.fetch_add(1, Ordering::Relaxed);
        if kind.is_post() {
            self.posts.fetch_add(1, Ordering::Relaxed);
        }
        self.bytes_in.fetch_add(before as u64, Ordering::Relaxed);
        self.bytes_out.fetch_add(after as u64, Ordering::Relaxed);
    }
}

/// Build the site described by `config`.
pub fn build_site(config: &SiteConfig) -> Result<BuildStats> {
    let build = &config.build;
    let exclude = build.exclude_set()?;

    let files = collect_all_files(&build.source);
    let planned: Vec<_> = files
        .into_iter()
        .map(|rel| {
            let action = classify(build, &exclude, &rel);
            (rel, action)
        })
        .collect();

    let html_count = planned.iter().filter(|(_, a)| *a == Action::Compress).count();
    log!("build"; "{} -> {}", build.source.display(), build.output.display());

    let progress = ProgressLine::new(&[
        ("html", html_count),
        ("copied", planned.len() - html_count),
    ]);
    let stats = BuildStats::default();
    let has_error = AtomicBool::new(false);

    let result = planned.par_iter().try_for_each(|(rel, action)| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = process_file(build, rel, *action, &stats) {
            // Report the first failure only; other workers abort
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", rel.display(), anyhow::Error::from(e));
            }
            return Err(anyhow!("Build failed"));
        }
        progress.inc(match action {
            Action::Compress => "html",
            Action::Copy => "copied",
        });
        Ok(())
    });

    match result {
        Ok(()) => progress.finish(),
        Err(e) => {
            drop(progress);
            return Err(e);
        }
    }

    log!(
        "done";
        "{} html ({} posts), {} copied, saved {} bytes",
        stats.compressed.load(Ordering::Relaxed),
        stats.posts.load(Ordering::Relaxed),
        stats.copied.load(Ordering::Relaxed),
        stats.saved()
    );

    Ok(stats)
}

/// Collect all files under `dir`, as paths relative to `dir`.
fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter_map(|e| e.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect()
}

fn classify(build: &BuildSectionConfig, exclude: &RegexSet, rel: &Path) -> Action {
    if build.minify && build.is_html(rel) && !exclude.is_match(&to_url_path(rel)) {
        Action::Compress
    } else {
        Action::Copy
    }
}

/// Forward-slash form of a relative path, used for patterns and URLs.
fn to_url_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn process_file(
    build: &BuildSectionConfig,
    rel: &Path,
    action: Action,
    stats: &BuildStats,
) -> Result<(), BuildError> {
    let source = build.source.join(rel);
    let bytes = fs::read(&source).map_err(|source_err| BuildError::Read {
        path: source.clone(),
        source: source_err,
    })?;

    let html = match action {
        Action::Compress => String::from_utf8(bytes).map_err(|e| {
            debug!("build"; "not utf-8, copying as-is: {}", rel.display());
            e.into_bytes()
        }),
        Action::Copy => Err(bytes),
    };

    match html {
        Ok(html) => {
            // Lossy form only classifies; the file keeps its exact name
            let kind = DocumentKind::from_url(&to_url_path(rel));
            let path = build.output.join(rel);
            let compressed = compress(&html);
            persist(&path, &compressed).map_err(|source| BuildError::Write { path, source })?;

            debug!(kind.as_str(); "{} ({} -> {})", rel.display(), html.len(), compressed.len());
            stats.record_html(kind, html.len(), compressed.len());
        }
        Err(bytes) => {
            let path = build.output.join(rel);
            persist(&path, &bytes).map_err(|source| BuildError::Write { path, source })?;
            stats.copied.fetch_add(1, Ordering::Relaxed);
        }
    }

    Ok(())
}
