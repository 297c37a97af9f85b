//! presshtml - collapse whitespace in rendered HTML before it is written.
//!
//! The core is [`compress::compress`], a pure string transform. The
//! [`document`] module wraps it with the write step used by site generators,
//! and [`cli`] drives it over a whole rendered site.

pub mod cli;
pub mod compress;
pub mod config;
pub mod document;
pub mod logger;

pub use compress::compress;
pub use document::{Document, DocumentKind, persist, write_compressed};
