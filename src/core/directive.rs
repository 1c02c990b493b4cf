//! Filelist line grammar
//!
//! Every filelist line classifies into exactly one [`Directive`]. The grammar
//! is prefix based: a two-character marker followed by a single space.
//!
//! | Prefix | Directive |
//! |--------|-----------|
//! | `-d `  | [`Directive::Define`] |
//! | `-i `  | [`Directive::IncludePath`] |
//! | `-L `  | [`Directive::Library`] |
//! | `-f `  | [`Directive::NestedManifest`] |
//! | `//`   | [`Directive::Comment`] |
//! | none   | [`Directive::SourceFile`] |

use std::fmt;

use crate::config::defaults::{
    COMMENT_MARKER, DEFINE_MARKER, INCLUDE_MARKER, LIBRARY_MARKER, NESTED_MARKER,
};

/// Directive kinds that carry a marker prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Preprocessor/compile define (`-d`)
    Define,
    /// Include search directory (`-i`)
    Include,
    /// Link library (`-L`)
    Library,
    /// Nested filelist (`-f`)
    Nested,
}

impl DirectiveKind {
    /// All kinds, in classification precedence order
    pub const ALL: [Self; 4] = [Self::Define, Self::Include, Self::Library, Self::Nested];

    /// Two-character marker for this kind
    pub fn marker(self) -> &'static str {
        match self {
            Self::Define => DEFINE_MARKER,
            Self::Include => INCLUDE_MARKER,
            Self::Library => LIBRARY_MARKER,
            Self::Nested => NESTED_MARKER,
        }
    }

    /// Strip `<marker> ` from the front of a trimmed line
    fn strip(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.marker())
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::trim)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A classified filelist line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// Comment line
    Comment,
    /// Source file path
    SourceFile(&'a str),
    /// Define value
    Define(&'a str),
    /// Include directory path
    IncludePath(&'a str),
    /// Library value
    Library(&'a str),
    /// Nested filelist path
    NestedManifest(&'a str),
}

impl<'a> Directive<'a> {
    /// Classify a raw filelist line.
    ///
    /// The line is trimmed first. Markers are tested in the order
    /// `-d`, `-i`, `-L`, `-f`; anything else is a source file, including
    /// lines that look like directives with an unknown flag (`-x foo`) or a
    /// marker with no payload (`-d`).
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Self::Blank;
        }
        if line.starts_with(COMMENT_MARKER) {
            return Self::Comment;
        }

        for kind in DirectiveKind::ALL {
            if let Some(payload) = kind.strip(line) {
                return Self::with_kind(kind, payload);
            }
        }

        Self::SourceFile(line)
    }

    fn with_kind(kind: DirectiveKind, payload: &'a str) -> Self {
        match kind {
            DirectiveKind::Define => Self::Define(payload),
            DirectiveKind::Include => Self::IncludePath(payload),
            DirectiveKind::Library => Self::Library(payload),
            DirectiveKind::Nested => Self::NestedManifest(payload),
        }
    }

    /// Marker kind of this directive, if it has one
    pub fn kind(&self) -> Option<DirectiveKind> {
        match self {
            Self::Define(_) => Some(DirectiveKind::Define),
            Self::IncludePath(_) => Some(DirectiveKind::Include),
            Self::Library(_) => Some(DirectiveKind::Library),
            Self::NestedManifest(_) => Some(DirectiveKind::Nested),
            Self::Blank | Self::Comment | Self::SourceFile(_) => None,
        }
    }
}

/// Render an entry as a filelist line: `<marker> <payload>`.
pub fn render(kind: DirectiveKind, payload: &str) -> String {
    format!("{kind} {payload}")
}

/// Split a flattened filelist entry back into its kind and payload.
///
/// Returns `None` for source-file entries.
pub fn split_entry(entry: &str) -> Option<(DirectiveKind, &str)> {
    DirectiveKind::ALL
        .into_iter()
        .find_map(|kind| {
            entry
                .strip_prefix(kind.marker())
                .and_then(|rest| rest.strip_prefix(' '))
                .map(|payload| (kind, payload))
        })
}
