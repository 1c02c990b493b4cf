//! Default configuration values

/// Comment marker; lines starting with it are ignored
pub const COMMENT_MARKER: &str = "//";

/// Preprocessor define directive
pub const DEFINE_MARKER: &str = "-d";

/// Include search directory directive
pub const INCLUDE_MARKER: &str = "-i";

/// Link library directive
pub const LIBRARY_MARKER: &str = "-L";

/// Nested filelist directive
pub const NESTED_MARKER: &str = "-f";

/// Default build directory for `flist prepare`
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Source list written into the build directory
pub const SOURCE_LIST_FILE: &str = "source_files.txt";

/// Environment assignments written into the build directory
pub const ENV_FILE: &str = "synth.env";

/// Space-separated include directories for the synthesis tool
pub const ENV_INCLUDE_DIRS: &str = "SYNTH_INCLUDE_DIRS";

/// Space-separated defines for the synthesis tool
pub const ENV_DEFINES: &str = "SYNTH_DEFINES";

/// Space-separated libraries for the synthesis tool
pub const ENV_LIBRARIES: &str = "SYNTH_LIBRARIES";

/// Project-level settings file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "flist.toml";

/// Global settings file, inside the config directory
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the global config directory
pub const ENV_CONFIG_DIR: &str = "FLIST_CONFIG_DIR";

/// Application name used in directory paths
pub const APP_NAME: &str = "flist";

/// Proptest iterations
pub const PROPTEST_CASES: u32 = 100;
