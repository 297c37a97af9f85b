//! Command-line interface module.

mod args;
pub mod build;
pub mod compress;

pub use args::{BuildArgs, Cli, Commands};
