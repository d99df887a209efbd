//! Integration tests for the CLI binary.
//!
//! These tests run the compiled `site-docs-sync` binary against temporary
//! project roots.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Creates a project root holding copies of the fixtures.
fn create_fixture_project() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["README.md", "kube.tf.example"] {
        fs::copy(fixtures_dir().join(name), temp_dir.path().join(name))
            .expect("Failed to copy fixture");
    }
    temp_dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_site-docs-sync"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run binary")
}

// ============================================================================
// Default Invocation Tests
// ============================================================================

mod default_invocation {
    use super::*;

    #[test]
    fn test_no_arguments_generates_site_docs() {
        let project = create_fixture_project();

        let output = run_in(project.path(), &[]);

        assert!(output.status.success());
        assert!(project.path().join("site-docs/index.md").exists());
        assert!(project.path().join("site-docs/configuration.md").exists());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("intro, quick start, architecture"));
        assert!(stdout.contains("(14 configuration keys)"));
    }

    #[test]
    fn test_missing_inputs_exit_with_error() {
        let temp_dir = TempDir::new().unwrap();

        let output = run_in(temp_dir.path(), &[]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("File not found"));
        assert!(stderr.contains("README.md"));
    }
}

// ============================================================================
// Option Tests
// ============================================================================

mod options {
    use super::*;

    #[test]
    fn test_root_and_out_overrides() {
        let project = create_fixture_project();
        let out_dir = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();

        let output = run_in(
            cwd.path(),
            &[
                "--root",
                project.path().to_str().unwrap(),
                "--out",
                out_dir.path().join("docs").to_str().unwrap(),
            ],
        );

        assert!(output.status.success());
        assert!(out_dir.path().join("docs/index.md").exists());
        assert!(!project.path().join("site-docs").exists());
        assert!(!cwd.path().join("site-docs").exists());
    }

    #[test]
    fn test_json_summary() {
        let project = create_fixture_project();

        let output = run_in(project.path(), &["--format", "json"]);

        assert!(output.status.success());
        let report: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Summary is not JSON");

        assert_eq!(report["sections"]["architecture"], true);
        assert_eq!(report["configuration_keys"][0], "version");
        assert_eq!(report["configuration_keys"].as_array().unwrap().len(), 14);
        assert!(report["index_path"]
            .as_str()
            .unwrap()
            .ends_with("index.md"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let project = create_fixture_project();

        let output = run_in(project.path(), &["--format", "yaml"]);

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid format: yaml"));
        assert!(!project.path().join("site-docs").exists());
    }
}
