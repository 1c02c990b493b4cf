//! Output formatting and logging setup
//!
//! Results go to stdout; logs, warnings and errors go to stderr so that
//! piping `flist resolve` into a file always yields a clean filelist.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// Output preferences from the global command-line flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Only errors on stderr, no summaries on stdout
    pub quiet: bool,
    /// Machine-readable stdout
    pub json: bool,
    /// Verbosity count (`--verbose`, `--verbose --verbose`)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create output configuration from flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Default log level implied by the flags
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` directives are honoured on top of the flag-derived level.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::builder()
            .with_default_directive(self.log_level().into())
            .from_env_lossy();

        // A subscriber may already be installed when embedded; keep it
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }

    /// Whether human-readable summaries should be printed
    pub fn show_summary(&self) -> bool {
        !self.quiet && !self.json
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
