//! Core logic module
//!
//! # Submodules
//!
//! - [`directive`] - Filelist line grammar
//! - [`expand`] - Environment variable expansion
//! - [`resolver`] - Recursive filelist resolution
//! - [`partition`] - Splitting resolved entries into build inputs
//! - [`prepare`] - Build directory preparation
//! - [`settings`] - Global and project settings

pub mod directive;
pub mod expand;
pub mod partition;
pub mod prepare;
pub mod resolver;
pub mod settings;
