//! flist - recursive filelist resolver
//!
//! Flattens HDL build filelists: nested `-f` filelists are inlined, source
//! files deduplicated and sorted, and `-d`/`-i`/`-L` directives collected in
//! first-seen order. The result is itself a valid filelist.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Filelist grammar, expansion, resolution and build preparation
//! - [`infra`] - Filesystem helpers
//! - [`config`] - Constants
//! - [`error`] - Error types and handling
//!
//! ```no_run
//! use std::path::Path;
//! use flist::core::resolver::{resolve, ResolveOptions};
//!
//! let resolution = resolve(Path::new("top.f"), ResolveOptions::new(true, true))?;
//! for entry in &resolution.entries {
//!     println!("{entry}");
//! }
//! # Ok::<(), flist::error::ResolveError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
