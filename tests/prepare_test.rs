//! Integration tests for `flist prepare`
//!
//! - Build directory is recreated
//! - Source list and tool environment are written
//! - Summary and JSON output

mod common;

use assert_fs::prelude::*;
use common::{sample_project, TestProject};
use predicates::prelude::*;

#[test]
fn test_prepare_writes_build_dir() {
    let project = sample_project();

    let output = project.run(&["prepare", "top.f"]);

    assert!(
        output.status.success(),
        "prepare should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        project.read_file("build/source_files.txt"),
        "fifo.v\nrtl/alu.v\nrtl/top.v\n"
    );
    assert_eq!(
        project.read_file("build/synth.env"),
        "SYNTH_DEFINES=FIFO_DEPTH=16 SYNTHESIS\n\
         SYNTH_INCLUDE_DIRS=rtl/include\n\
         SYNTH_LIBRARIES=unisims_ver\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SYNTH_DEFINES: FIFO_DEPTH=16 SYNTHESIS"), "stdout: {stdout}");
    assert!(stdout.contains("3 source files"), "stdout: {stdout}");
}

#[test]
fn test_prepare_replaces_previous_build() {
    let project = sample_project();
    project.create_file("build/stale.log", "old run");

    let output = project.run(&["prepare", "top.f"]);

    assert!(output.status.success());
    assert!(!project.file_exists("build/stale.log"));
    assert!(project.file_exists("build/source_files.txt"));
}

#[test]
fn test_prepare_custom_build_dir() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/core.v").write_str("module core; endmodule\n").unwrap();
    temp.child("top.f").write_str("src/core.v\n-d SIM\n").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_flist"))
        .current_dir(temp.path())
        .env("FLIST_CONFIG_DIR", temp.path().join(".cfg"))
        .env_remove("FLIST_BUILD_DIR")
        .args(["prepare", "top.f", "--build-dir", "out/sim"])
        .output()
        .unwrap();

    assert!(output.status.success());
    temp.child("out/sim/source_files.txt")
        .assert(predicate::str::contains("src/core.v"));
    temp.child("out/sim/synth.env")
        .assert(predicate::str::contains("SYNTH_DEFINES=SIM"));
    temp.child("build").assert(predicate::path::missing());
}

#[test]
fn test_prepare_build_dir_from_settings() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("flist.toml").write_str("[build]\ndir = \"synth\"\n").unwrap();
    temp.child("top.f").write_str("-d ONLY_DEFINES\n").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_flist"))
        .current_dir(temp.path())
        .env("FLIST_CONFIG_DIR", temp.path().join(".cfg"))
        .env_remove("FLIST_BUILD_DIR")
        .args(["prepare", "top.f"])
        .output()
        .unwrap();

    assert!(output.status.success());
    temp.child("synth/source_files.txt").assert(predicate::path::exists());
    temp.child("synth/source_files.txt").assert("");
}

#[test]
fn test_prepare_expands_environment() {
    let project = TestProject::new();
    project.create_file("vendor/ip.v", "");
    project.create_file("top.f", "$FLIST_PREP_VENDOR/ip.v\n");

    let output = project
        .command()
        .env("FLIST_PREP_VENDOR", "vendor")
        .args(["prepare", "top.f"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(project.read_file("build/source_files.txt"), "vendor/ip.v\n");
    assert!(output.stderr.is_empty(), "ip.v exists, so no warnings expected");
}

#[test]
fn test_prepare_build_dir_from_environment() {
    let project = sample_project();

    let output = project
        .command()
        .env("FLIST_BUILD_DIR", "env_build")
        .args(["prepare", "top.f"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(project.file_exists("env_build/source_files.txt"));
    assert!(!project.file_exists("build"));
}

#[test]
fn test_prepare_json_summary() {
    let project = sample_project();

    let output = project.run(&["prepare", "top.f", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["build"]["source_count"], 3);
    assert_eq!(value["inputs"]["libraries"], serde_json::json!(["unisims_ver"]));
    assert_eq!(value["warnings"], serde_json::json!([]));
}

#[test]
fn test_prepare_missing_input_fails() {
    let project = TestProject::new();

    let output = project.run(&["prepare", "absent.f"]);

    assert!(!output.status.success());
    assert!(!project.file_exists("build"));
}

#[test]
fn test_prepare_refuses_project_dir_as_build_dir() {
    let project = sample_project();

    let output = project.run(&["prepare", "top.f", "--build-dir", "."]);

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("would be wiped"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.file_exists("top.f"));
    assert!(project.file_exists("rtl/top.v"));
}

#[test]
fn test_prepare_refuses_settings_build_dir_above_project() {
    let project = sample_project();
    project.create_file("flist.toml", "[build]\ndir = \"..\"\n");

    let output = project.run(&["prepare", "top.f"]);

    assert!(!output.status.success());
    assert!(project.file_exists("top.f"));
}
