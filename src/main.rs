//! presshtml - collapse whitespace in rendered HTML sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use presshtml::cli::{Cli, Commands, build::build_site, compress::compress_file};
use presshtml::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    presshtml::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Build { build_args } => {
            let config = SiteConfig::load(&cli, build_args)?;
            build_site(&config).map(|_| ())
        }
        Commands::Compress { input, output } => {
            compress_file(input.as_deref(), output.as_deref())
        }
    }
}
