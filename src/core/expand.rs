//! Environment variable expansion
//!
//! Filelist payloads may reference the environment as `${NAME}` or `$NAME`.
//! Unset variables expand to the empty string.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// `${...}` with anything but `}` inside, or bare `$NAME`
fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
            .expect("env var pattern is a valid regex")
    })
}

/// Substitute environment variables from the process environment.
///
/// # Examples
/// ```
/// use flist::core::expand::expand_env_vars;
///
/// std::env::set_var("FLIST_DOC_ROOT", "/opt/ip");
/// assert_eq!(expand_env_vars("${FLIST_DOC_ROOT}/fifo.v"), "/opt/ip/fifo.v");
/// assert_eq!(expand_env_vars("$FLIST_DOC_ROOT/fifo.v"), "/opt/ip/fifo.v");
/// std::env::remove_var("FLIST_DOC_ROOT");
/// ```
pub fn expand_env_vars(input: &str) -> String {
    expand_env_vars_with(input, |name| std::env::var(name).ok())
}

/// Substitute environment variables using a custom lookup.
///
/// Names for which `lookup` returns `None` expand to the empty string.
pub fn expand_env_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains('$') {
        return input.to_string();
    }

    env_var_pattern()
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            lookup(name).unwrap_or_default()
        })
        .into_owned()
}
