//! Filelist resolution
//!
//! Walks a root filelist depth-first, inlining nested `-f` filelists, and
//! produces one flattened, deduplicated, deterministically ordered list:
//! sorted unique source files, then defines, include directories and
//! libraries in first-seen order.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::COMMENT_MARKER;
use crate::core::directive::{render, Directive, DirectiveKind};
use crate::core::expand::expand_env_vars;
use crate::error::ResolveError;
use crate::infra::filesystem;

/// Resolution flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Store source files and include directories in expanded form
    pub expand: bool,
    /// Warn about source files and include directories missing on disk
    pub verify: bool,
}

impl ResolveOptions {
    /// Create options from the two flags
    pub fn new(expand: bool, verify: bool) -> Self {
        Self { expand, verify }
    }
}

/// Entries accumulated over one resolution.
///
/// Source files are unique; defines, includes and libraries keep every
/// occurrence in the order they were met.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSet {
    files: BTreeSet<String>,
    defines: Vec<String>,
    includes: Vec<String>,
    libraries: Vec<String>,
}

impl ResolvedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source file; returns `false` if it was already present
    pub fn add_file(&mut self, path: String) -> bool {
        self.files.insert(path)
    }

    /// Append a directive payload to its category
    pub fn push(&mut self, kind: DirectiveKind, payload: String) {
        match kind {
            DirectiveKind::Define => self.defines.push(payload),
            DirectiveKind::Include => self.includes.push(payload),
            DirectiveKind::Library => self.libraries.push(payload),
            // Nested filelists are inlined, never stored
            DirectiveKind::Nested => {}
        }
    }

    /// Number of unique source files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Flatten into filelist entries.
    ///
    /// Files come first, sorted, followed by `-d`, `-i` and `-L` entries.
    pub fn into_entries(self) -> Vec<String> {
        let mut entries = Vec::with_capacity(
            self.files.len() + self.defines.len() + self.includes.len() + self.libraries.len(),
        );
        entries.extend(self.files);
        entries.extend(self.defines.iter().map(|d| render(DirectiveKind::Define, d)));
        entries.extend(self.includes.iter().map(|i| render(DirectiveKind::Include, i)));
        entries.extend(self.libraries.iter().map(|l| render(DirectiveKind::Library, l)));
        entries
    }
}

/// Advisory conditions met during resolution.
///
/// None of these change the output, except that a missing or unreadable
/// nested filelist contributes no entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// `-f` target does not exist
    MissingManifest { path: PathBuf, written: String },
    /// `-f` target exists but could not be read
    UnreadableManifest { path: PathBuf, error: String },
    /// Verified source file does not exist
    MissingSourceFile { path: PathBuf, written: String },
    /// Verified include directory does not exist
    MissingIncludeDir { path: PathBuf, written: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingManifest { path, written } => write!(
                f,
                "Filelist not found: {} (expanded from: {written})",
                path.display()
            ),
            Self::UnreadableManifest { path, error } => {
                write!(f, "Could not read filelist {}: {error}", path.display())
            }
            Self::MissingSourceFile { path, written } => write!(
                f,
                "File not found: {} (expanded from: {written})",
                path.display()
            ),
            Self::MissingIncludeDir { path, written } => write!(
                f,
                "Include directory not found: {} (expanded from: {written})",
                path.display()
            ),
        }
    }
}

/// Result of a successful resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Flattened filelist entries
    pub entries: Vec<String>,
    /// Warnings in the order they were raised
    pub warnings: Vec<Warning>,
}

/// Recursive filelist resolver.
///
/// A resolver owns its accumulator and is consumed by [`Resolver::resolve`],
/// so independent resolutions never share state.
#[derive(Debug)]
pub struct Resolver {
    options: ResolveOptions,
    set: ResolvedSet,
    warnings: Vec<Warning>,
    /// Canonical paths of the filelists currently being read, outermost first
    open: Vec<PathBuf>,
}

impl Resolver {
    /// Create a resolver with the given flags
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            set: ResolvedSet::new(),
            warnings: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Resolve a root filelist.
    ///
    /// Fails if the root cannot be read or a filelist includes itself.
    pub fn resolve(mut self, root: &Path) -> Result<Resolution, ResolveError> {
        let content = filesystem::read_file(root).map_err(ResolveError::ManifestRead)?;

        let root = absolute(root);
        let dir = parent_dir(&root);
        tracing::debug!("Resolving filelist {}", root.display());

        self.walk(canonical(&root), &dir, &content)?;

        tracing::info!(
            "Resolved {} unique source files from {}",
            self.set.file_count(),
            root.display()
        );

        Ok(Resolution {
            entries: self.set.into_entries(),
            warnings: self.warnings,
        })
    }

    fn walk(&mut self, key: PathBuf, dir: &Path, content: &str) -> Result<(), ResolveError> {
        self.open.push(key);
        for line in content.lines() {
            self.process_line(line, dir)?;
        }
        self.open.pop();
        Ok(())
    }

    fn process_line(&mut self, line: &str, dir: &Path) -> Result<(), ResolveError> {
        match Directive::classify(line) {
            Directive::Blank | Directive::Comment => {}
            Directive::Define(value) => self.set.push(DirectiveKind::Define, value.to_string()),
            Directive::Library(value) => self.set.push(DirectiveKind::Library, value.to_string()),
            Directive::IncludePath(written) => {
                if self.options.verify {
                    if let Some(path) = missing_path(written, dir) {
                        self.warn(Warning::MissingIncludeDir {
                            path,
                            written: written.to_string(),
                        });
                    }
                }
                let stored = self.stored_form(written);
                self.set.push(DirectiveKind::Include, stored);
            }
            Directive::SourceFile(written) => {
                if self.options.verify {
                    if let Some(path) = missing_path(written, dir) {
                        self.warn(Warning::MissingSourceFile {
                            path,
                            written: written.to_string(),
                        });
                    }
                }
                let stored = self.stored_form(written);
                // An entry that expands to nothing, or to a comment, is not a file
                if !stored.is_empty() && !stored.starts_with(COMMENT_MARKER) {
                    self.set.add_file(stored);
                }
            }
            Directive::NestedManifest(written) => self.descend(written, dir)?,
        }
        Ok(())
    }

    fn descend(&mut self, written: &str, dir: &Path) -> Result<(), ResolveError> {
        let path = dir.join(expand_env_vars(written));

        if !path.exists() {
            self.warn(Warning::MissingManifest {
                path,
                written: written.to_string(),
            });
            return Ok(());
        }

        let key = canonical(&path);
        if let Some(start) = self.open.iter().position(|open| *open == key) {
            let cycle = self.open[start..]
                .iter()
                .chain(std::iter::once(&key))
                .map(|p| p.display().to_string())
                .collect();
            return Err(ResolveError::CircularInclude { cycle });
        }

        let content = match filesystem::read_file(&path) {
            Ok(content) => content,
            Err(e) => {
                self.warn(Warning::UnreadableManifest {
                    path,
                    error: e.to_string(),
                });
                return Ok(());
            }
        };

        tracing::debug!("Inlining filelist {}", path.display());
        let nested_dir = parent_dir(&path);
        self.walk(key, &nested_dir, &content)
    }

    fn stored_form(&self, written: &str) -> String {
        if self.options.expand {
            expand_env_vars(written)
        } else {
            written.to_string()
        }
    }

    fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Resolve a root filelist with the given flags
pub fn resolve(root: &Path, options: ResolveOptions) -> Result<Resolution, ResolveError> {
    Resolver::new(options).resolve(root)
}

/// Resolve a root filelist into flattened entries.
///
/// Errors are logged and yield an empty list; callers that need to tell an
/// empty filelist from a failure should use [`resolve`].
pub fn process_filelist(root: &Path, expand: bool, verify: bool) -> Vec<String> {
    match resolve(root, ResolveOptions::new(expand, verify)) {
        Ok(resolution) => resolution.entries,
        Err(e) => {
            tracing::error!("{e}");
            Vec::new()
        }
    }
}

/// Existence check of an entry, relative to the filelist's directory.
///
/// The check always uses the expanded form, whatever is stored. An entry
/// that expands to nothing names no path and is always missing.
fn missing_path(written: &str, dir: &Path) -> Option<PathBuf> {
    let expanded = expand_env_vars(written);
    if expanded.is_empty() {
        return Some(PathBuf::new());
    }
    let path = dir.join(expanded);
    (!path.exists()).then_some(path)
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| absolute(path))
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
