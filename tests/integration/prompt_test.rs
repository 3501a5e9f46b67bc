//! Integration tests for prompt rendering (CLI)

use std::fs;

use crate::helpers::{home_tmp, promptline_cmd, render_prompt, run_promptline};

// ============================================================================
// Output Discipline
// ============================================================================

#[test]
fn piped_output_has_no_trailing_newline() {
    let (_tmp, home) = home_tmp();
    let stdout = render_prompt(&["--shell", "bash"], &home, &home);
    assert!(!stdout.ends_with('\n'), "got: {:?}", stdout);
}

#[test]
fn prompt_renders_identically_on_repeated_runs() {
    let (_tmp, home) = home_tmp();
    let first = render_prompt(&["--shell", "bash"], &home, &home);
    let second = render_prompt(&["--shell", "bash"], &home, &home);
    assert_eq!(first, second);
}

// ============================================================================
// Shell Styles
// ============================================================================

#[test]
fn snapshot_bash_prompt_for_a_deep_path() {
    let (_tmp, home) = home_tmp();
    let dir = home
        .join("Go")
        .join("src")
        .join("github.com")
        .join("org")
        .join("project");
    fs::create_dir_all(&dir).unwrap();
    let stdout = render_prompt(&["--shell", "bash", "--theme", "dark"], &home, &dir);
    insta::assert_snapshot!(stdout, @r"\[\e[38;5;15m\]\[\e[48;5;31m\] ~ \[\e[48;5;237m\]\[\e[38;5;31m\]\[\e[38;5;250m\]\[\e[48;5;237m\] Go \[\e[48;5;237m\]\[\e[38;5;244m\]\[\e[38;5;250m\]\[\e[48;5;237m\] … \[\e[48;5;237m\]\[\e[38;5;244m\]\[\e[38;5;250m\]\[\e[48;5;237m\] project \[\e[48;5;236m\]\[\e[38;5;237m\]\[\e[38;5;15m\]\[\e[48;5;236m\] \$ \[\e[0m\]\[\e[38;5;236m\]\[\e[0m\]");
}

#[test]
fn bash_escapes_are_wrapped_in_ps1_markers() {
    let (_tmp, home) = home_tmp();
    let stdout = render_prompt(&["--shell", "bash"], &home, &home);
    assert!(stdout.starts_with("\\[\\e[38;5;15m\\]\\[\\e[48;5;31m\\] ~ "));
    assert!(stdout.ends_with("\\[\\e[0m\\]"));
    // PS1 markers carry no raw escape byte; bash expands \e itself
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn zsh_prompt_uses_zsh_wrappers() {
    let (_tmp, home) = home_tmp();
    let stdout = render_prompt(&["--shell", "zsh"], &home, &home);
    assert!(stdout.contains("%{\u{1b}[38;5;15m%}"));
    assert!(stdout.contains(" %# "));
    assert!(stdout.ends_with("%{$reset_color%}"));
}

#[test]
fn unknown_shell_renders_plain_text() {
    let (_tmp, home) = home_tmp();
    let stdout = render_prompt(&["--shell", "tcsh"], &home, &home);
    assert_eq!(stdout, " ~ \u{e0b0} $ \u{e0b0}");
    assert!(!stdout.contains('\u{1b}'));
}

// ============================================================================
// Segments from the Environment
// ============================================================================

#[test]
fn virtualenv_block_leads_the_prompt() {
    let (_tmp, home) = home_tmp();
    let output = promptline_cmd()
        .args(["--shell", "plain"])
        .env("HOME", &home)
        .env("VIRTUAL_ENV", "/opt/venvs/myenv")
        .current_dir(&home)
        .output()
        .expect("Failed to execute promptline");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, " myenv \u{e0b0} ~ \u{e0b0} $ \u{e0b0}");
}

#[test]
fn empty_virtualenv_variable_adds_no_block() {
    let (_tmp, home) = home_tmp();
    let output = promptline_cmd()
        .args(["--shell", "plain"])
        .env("HOME", &home)
        .env("VIRTUAL_ENV", "")
        .current_dir(&home)
        .output()
        .expect("Failed to execute promptline");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, " ~ \u{e0b0} $ \u{e0b0}");
}

// ============================================================================
// CLI Surface
// ============================================================================

#[test]
fn help_shows_subcommands() {
    let (stdout, _stderr, exit_code) = run_promptline(&["--help"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("config"));
    assert!(stdout.contains("doctor"));
    assert!(stdout.contains("completions"));
}

#[test]
fn version_reports_the_package_version() {
    let (stdout, _stderr, exit_code) = run_promptline(&["--version"]);
    assert_eq!(exit_code, 0);
    let expected = format!("promptline {}", env!("CARGO_PKG_VERSION"));
    assert!(stdout.starts_with(&expected), "got: {:?}", stdout);
}

#[test]
fn completions_emit_a_bash_script() {
    let (stdout, _stderr, exit_code) = run_promptline(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("_promptline"));
}

// ============================================================================
// Doctor
// ============================================================================

#[test]
fn doctor_json_is_valid_and_complete() {
    let (_tmp, home) = home_tmp();
    let output = promptline_cmd()
        .args(["doctor", "--json"])
        .env("HOME", &home)
        .current_dir(&home)
        .output()
        .expect("Failed to execute promptline");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("doctor --json must emit valid JSON");
    assert_eq!(json["shell"], "bash");
    assert_eq!(json["effective_shell"], "bash");
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["cwd_display"], "~");
    assert_eq!(json["writable"], true);
    assert!(json["virtualenv"].is_null());
    assert!(json["vcs_summary"].is_null());
}

#[test]
fn doctor_human_output_lists_the_facts() {
    let (_tmp, home) = home_tmp();
    let output = promptline_cmd()
        .args(["doctor", "--shell", "fish"])
        .env("HOME", &home)
        .current_dir(&home)
        .output()
        .expect("Failed to execute promptline");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shell:       fish (renders as plain)"));
    assert!(stdout.contains("display:     ~"));
    assert!(stdout.contains("git:         (no repository)"));
}
