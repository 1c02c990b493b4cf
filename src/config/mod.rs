//! Configuration and constants
//!
//! - [`defaults`] - Filelist grammar markers, file names and environment variable names

pub mod defaults;
