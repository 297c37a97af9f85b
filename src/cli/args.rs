//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Collapse whitespace in rendered HTML sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "presshtml.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compress every HTML file of a rendered site into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Compress a single file (or stdin) to a file or stdout
    #[command(visible_alias = "c")]
    Compress {
        /// Input HTML file, `-` or omitted for stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        /// Output file (parent directories are created). Stdout if omitted
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Build command arguments. Values override `[build]` in the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Rendered site directory (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Output directory (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Collapse whitespace in HTML files; `--minify=false` only copies
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["presshtml", "build", "-s", "_site", "-o", "out", "-m", "false"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.source, Some(PathBuf::from("_site")));
        assert_eq!(build_args.output, Some(PathBuf::from("out")));
        assert_eq!(build_args.minify, Some(false));
        assert_eq!(cli.config, PathBuf::from("presshtml.toml"));
    }

    #[test]
    fn test_parse_build_alias_defaults() {
        let cli = Cli::parse_from(["presshtml", "b", "--minify"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.source, None);
        assert_eq!(build_args.minify, Some(true));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_compress() {
        let cli = Cli::parse_from(["presshtml", "c", "page.html", "-o", "out/page.html"]);
        let Commands::Compress { input, output } = cli.command else {
            panic!("expected compress");
        };
        assert_eq!(input, Some(PathBuf::from("page.html")));
        assert_eq!(output, Some(PathBuf::from("out/page.html")));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["presshtml", "c", "-V", "x.html"]);
        assert!(cli.verbose);
        let Commands::Compress { input, .. } = cli.command else {
            panic!("expected compress");
        };
        assert_eq!(input, Some(PathBuf::from("x.html")));

        let cli = Cli::parse_from(["presshtml", "--verbose", "build"]);
        assert!(cli.verbose);
        let cli = Cli::parse_from(["presshtml", "b", "-V"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_version_long_only() {
        let err = Cli::try_parse_from(["presshtml", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
