//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::directive::{render, DirectiveKind};

    /// Generate a relative source path such as `rtl/core/alu_3.sv`
    pub fn relative_path() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,8}(/[a-z][a-z0-9_]{0,8}){0,3}\\.(v|sv|vh|vhd)"
    }

    /// Generate a define value such as `WIDTH=32` or `SYNTHESIS`
    pub fn define_value() -> impl Strategy<Value = String> {
        "[A-Z][A-Z0-9_]{0,10}(=[0-9]{1,4})?"
    }

    /// Generate a directive kind that survives into flattened output
    pub fn directive_kind() -> impl Strategy<Value = DirectiveKind> {
        prop_oneof![
            Just(DirectiveKind::Define),
            Just(DirectiveKind::Include),
            Just(DirectiveKind::Library),
        ]
    }

    /// Generate one filelist line without nested filelists
    pub fn filelist_line() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => relative_path(),
            2 => define_value().prop_map(|v| render(DirectiveKind::Define, &v)),
            1 => relative_path().prop_map(|p| render(DirectiveKind::Include, &p)),
            1 => "[a-z_]{1,12}".prop_map(|l| render(DirectiveKind::Library, &l)),
            1 => "// [a-z ]{0,20}",
            1 => Just(String::new()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::PROPTEST_CASES;
    use crate::core::directive::Directive;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

        #[test]
        fn test_relative_path_generator(path in relative_path()) {
            prop_assert!(!path.starts_with('-'));
            prop_assert!(!path.starts_with('/'));
            prop_assert!(!path.contains(char::is_whitespace));
        }

        #[test]
        fn test_filelist_line_generator_never_nests(line in filelist_line()) {
            prop_assert!(!matches!(Directive::classify(&line), Directive::NestedManifest(_)));
        }
    }
}
