//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory holding filelists and source trees, and
/// runs the flist binary inside it.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Build a flist command running inside the project.
    ///
    /// The global config directory points inside the project so the
    /// developer's own settings never leak into tests.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_flist"));
        cmd.current_dir(self.path());
        cmd.env("FLIST_CONFIG_DIR", self.path().join(".flist-global"));
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("FLIST_BUILD_DIR");
        cmd
    }

    /// Run flist with the given arguments
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command();
        cmd.args(args);
        cmd.output().expect("Failed to execute flist")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout lines of a finished command
#[allow(dead_code)]
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// A small project: root filelist, one nested filelist in another directory
#[allow(dead_code)]
pub fn sample_project() -> TestProject {
    let project = TestProject::new();
    project.create_file("rtl/top.v", "module top; endmodule\n");
    project.create_file("rtl/alu.v", "module alu; endmodule\n");
    project.create_dir("rtl/include");
    project.create_file("ip/fifo/fifo.v", "module fifo; endmodule\n");
    project.create_file(
        "ip/fifo/fifo.f",
        "// fifo ip\n\
         fifo.v\n\
         -d FIFO_DEPTH=16\n",
    );
    project.create_file(
        "top.f",
        "// project root\n\
         rtl/top.v\n\
         rtl/alu.v\n\
         -f ip/fifo/fifo.f\n\
         rtl/top.v\n\
         -d SYNTHESIS\n\
         -i rtl/include\n\
         -L unisims_ver\n",
    );
    project
}
