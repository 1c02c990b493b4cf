//! Infrastructure layer
//!
//! Handles filesystem I/O. Everything that touches the disk outside of
//! reading filelists goes through here.

pub mod filesystem;
