//! Splitting a flattened filelist back into build inputs
//!
//! The resolver's output is itself a filelist. Tool drivers need it the other
//! way round: plain source files in one list, and defines, include
//! directories and libraries handed over separately.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::defaults::{ENV_DEFINES, ENV_INCLUDE_DIRS, ENV_LIBRARIES};
use crate::core::directive::{split_entry, DirectiveKind};
use crate::infra::filesystem::join_lines;

/// Build inputs, one list per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildInputs {
    /// Source files, in filelist order
    pub source_files: Vec<String>,
    /// Define values without the `-d` marker
    pub defines: Vec<String>,
    /// Include directories without the `-i` marker
    pub include_dirs: Vec<String>,
    /// Libraries without the `-L` marker
    pub libraries: Vec<String>,
}

impl BuildInputs {
    /// Partition flattened filelist entries by their marker
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut inputs = Self::default();
        for entry in entries {
            let entry = entry.as_ref();
            match split_entry(entry) {
                Some((DirectiveKind::Define, value)) => inputs.defines.push(value.to_string()),
                Some((DirectiveKind::Include, dir)) => inputs.include_dirs.push(dir.to_string()),
                Some((DirectiveKind::Library, lib)) => inputs.libraries.push(lib.to_string()),
                // Flattened output never carries -f, so treat it like any unknown line
                Some((DirectiveKind::Nested, _)) | None => {
                    inputs.source_files.push(entry.to_string());
                }
            }
        }
        inputs
    }

    /// Environment handed to the synthesis tool
    pub fn to_env_map(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();
        env.insert(ENV_INCLUDE_DIRS.to_string(), self.include_dirs.join(" "));
        env.insert(ENV_DEFINES.to_string(), self.defines.join(" "));
        env.insert(ENV_LIBRARIES.to_string(), self.libraries.join(" "));
        env
    }

    /// Source files as a newline-terminated list
    pub fn source_list(&self) -> String {
        join_lines(&self.source_files)
    }

    /// True when nothing was resolved
    pub fn is_empty(&self) -> bool {
        self.source_files.is_empty()
            && self.defines.is_empty()
            && self.include_dirs.is_empty()
            && self.libraries.is_empty()
    }
}
