//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Command for the promptline binary with every prompt-relevant
/// variable scrubbed, so each test controls exactly what the prompt
/// sees.
pub fn promptline_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_promptline"));
    cmd.env_remove("VIRTUAL_ENV")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG");
    cmd
}

/// Run promptline and capture output.
pub fn run_promptline(args: &[&str]) -> (String, String, i32) {
    let output = promptline_cmd()
        .args(args)
        .output()
        .expect("Failed to execute promptline");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Render the prompt in `dir` with `home` as the home directory.
pub fn render_prompt(args: &[&str], home: &Path, dir: &Path) -> String {
    let output = promptline_cmd()
        .args(args)
        .env("HOME", home)
        .current_dir(dir)
        .output()
        .expect("Failed to execute promptline");
    assert!(output.status.success(), "promptline failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Fresh home directory for prompt tests.
///
/// The path is canonicalized because macOS tempdirs live behind a
/// `/var` symlink and the prompt sees the resolved form.
pub fn home_tmp() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("Failed to create tempdir");
    let root = tmp.path().canonicalize().expect("Failed to canonicalize");
    (tmp, root)
}
