//! Integration tests for the burger-split binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::helpers::{css_files, load_fixture};

fn burger_split(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("burger-split").unwrap();
    cmd.current_dir(cwd).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Project layout the tool expects by default: `src/hamburgers.css`.
fn project_with_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src").join("hamburgers.css"),
        load_fixture("hamburgers.css"),
    )
    .unwrap();
    dir
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let dir = TempDir::new().unwrap();
    burger_split(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    burger_split(dir.path())
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

// ============================================================================
// Default Layout Tests
// ============================================================================

#[test]
fn no_arguments_splits_src_hamburgers() {
    let dir = project_with_fixture();

    burger_split(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated: spin.css"))
        .stdout(predicate::str::contains("Generated: squeeze.css"))
        .stdout(predicate::str::contains("Split 2 animation(s)"))
        .stdout(predicate::str::contains("1 segment(s) skipped"));

    assert_eq!(
        css_files(&dir.path().join("src"), "hamburgers.css"),
        vec!["spin.css", "squeeze.css"]
    );
}

#[test]
fn missing_input_exits_1_with_error() {
    let dir = TempDir::new().unwrap();

    burger_split(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("hamburgers.css"));

    assert!(!dir.path().join("src").exists());
}

#[test]
fn input_without_blocks_exits_0() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src").join("hamburgers.css"), ".a {}\n").unwrap();

    burger_split(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Split 0 animation(s)"));

    assert!(css_files(&dir.path().join("src"), "hamburgers.css").is_empty());
}

// ============================================================================
// Flag Tests
// ============================================================================

#[test]
fn explicit_paths_are_honoured() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("vendor.css");
    fs::write(&input, load_fixture("hamburgers.css")).unwrap();

    burger_split(dir.path())
        .args(["--input", "vendor.css", "--output-dir", "dist"])
        .assert()
        .success();

    assert!(dir.path().join("dist").join("spin.css").exists());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = project_with_fixture();

    burger_split(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would generate: spin.css"))
        .stdout(predicate::str::contains("Would split 2 animation(s)"));

    assert!(css_files(&dir.path().join("src"), "hamburgers.css").is_empty());
}

#[test]
fn config_file_overrides_template() {
    let dir = project_with_fixture();
    fs::write(
        dir.path().join("burger-split.toml"),
        "[template]\nhost_selector = \".nav-toggle\"\nstate_opacity = \"0.5\"\n",
    )
    .unwrap();

    burger_split(dir.path())
        .args(["--config", "burger-split.toml"])
        .assert()
        .success();

    let css = fs::read_to_string(dir.path().join("src").join("spin.css")).unwrap();
    assert!(css.contains(".nav-toggle--spin .nav-toggle-inner"));
    assert!(css.contains(".nav-toggle.hamburger--spin.burger--active:hover"));
    assert!(css.contains("opacity: 0.5;"));
}

#[test]
fn invalid_config_exits_1() {
    let dir = project_with_fixture();
    fs::write(dir.path().join("bad.toml"), "[template\n").unwrap();

    burger_split(dir.path())
        .args(["--config", "bad.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn repeated_identifier_is_generated_once() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src").join("hamburgers.css"),
        "/* A */ .hamburger--spin {a}\n/* B */ .hamburger--spin {b}",
    )
    .unwrap();

    let assert = burger_split(dir.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert_eq!(stdout.matches("Generated: spin.css").count(), 1);
    assert!(stdout.contains("Split 1 animation(s)"));
    assert!(stdout.contains("1 duplicate block(s) replaced an earlier one"));
    assert_eq!(
        css_files(&dir.path().join("src"), "hamburgers.css"),
        vec!["spin.css"]
    );
}

#[test]
fn write_failure_reports_and_exits_1() {
    let dir = project_with_fixture();
    // A directory named spin.css cannot be overwritten as a file
    fs::create_dir(dir.path().join("src").join("spin.css")).unwrap();

    burger_split(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Generated: squeeze.css"))
        .stderr(predicate::str::contains("Failed to write"))
        .stderr(predicate::str::contains("1 file(s) could not be written"));

    assert!(dir.path().join("src").join("squeeze.css").is_file());
}
