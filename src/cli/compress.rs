//! `compress` command: one document from a file or stdin.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::compress::compress;
use crate::debug;
use crate::document::write_compressed;

/// Compress `input` (stdin for `None` or `-`) into `output` (stdout for `None`).
pub fn compress_file(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let html = read_input(input)?;

    match output {
        Some(path) => {
            write_compressed(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("compress"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(compress(&html).as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read stdin")?;
            Ok(html)
        }
    }
}
