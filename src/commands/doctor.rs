//! Environment report: everything the prompt would be built from.
//!
//! When a segment unexpectedly disappears from someone's prompt, this
//! is the command that shows which fact went missing.

use anyhow::Result;
use serde::Serialize;

use promptline::shell::Shell;
use promptline::sources::{env, git, writable};
use promptline::Config;

/// Snapshot of the prompt's inputs.
#[derive(Debug, Serialize)]
struct Report {
    shell: String,
    effective_shell: &'static str,
    theme: String,
    cwd: String,
    cwd_display: String,
    writable: bool,
    virtualenv: Option<String>,
    vcs_summary: Option<String>,
    vcs_dirty: bool,
    config_path: Option<String>,
    config_exists: bool,
}

#[cfg(not(tarpaulin_include))]
pub fn handle(shell_flag: Option<&str>, theme_flag: Option<&str>, json: bool) -> Result<()> {
    let report = gather(shell_flag, theme_flag);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("shell:       {} (renders as {})", report.shell, report.effective_shell);
    println!("theme:       {}", report.theme);
    println!("cwd:         {}", report.cwd);
    println!("display:     {}", report.cwd_display);
    println!("writable:    {}", if report.writable { "yes" } else { "no" });
    println!("virtualenv:  {}", report.virtualenv.as_deref().unwrap_or("(none)"));
    match report.vcs_summary.as_deref() {
        Some(summary) => println!(
            "git:         {} ({})",
            summary,
            if report.vcs_dirty { "dirty" } else { "clean" }
        ),
        None => println!("git:         (no repository)"),
    }
    match report.config_path.as_deref() {
        Some(path) => println!(
            "config:      {}{}",
            path,
            if report.config_exists { "" } else { " (missing)" }
        ),
        None => println!("config:      (no config directory)"),
    }

    Ok(())
}

fn gather(shell_flag: Option<&str>, theme_flag: Option<&str>) -> Report {
    let config = Config::load().unwrap_or_default();
    let shell = config.shell_name(shell_flag);
    let effective_shell = Shell::resolve(&shell).name();
    let theme = config.theme_name(theme_flag);

    let cwd = env::current_dir();
    let status = git::probe();
    let config_path = Config::config_path().ok();

    Report {
        shell,
        effective_shell,
        theme,
        writable: writable::is_writable(&cwd),
        cwd: cwd.to_string_lossy().into_owned(),
        cwd_display: env::current_dir_display(),
        virtualenv: env::virtualenv_name(),
        vcs_summary: (!status.summary.is_empty()).then(|| status.summary.clone()),
        vcs_dirty: status.dirty,
        config_exists: config_path.as_ref().map(|p| p.exists()).unwrap_or(false),
        config_path: config_path.map(|p| p.display().to_string()),
    }
}
