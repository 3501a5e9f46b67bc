//! Working directory and environment lookups.

use std::path::PathBuf;

use tracing::debug;

/// Absolute current directory, for filesystem probes.
///
/// Falls back to `$PWD`, then `/`, when the real directory is gone
/// (deleted under the shell, permissions changed).
pub fn current_dir() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            debug!("current dir unavailable: {}", err);
            std::env::var_os("PWD")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/"))
        }
    }
}

/// Current directory in display form: home prefix abbreviated to `~`,
/// trailing slashes dropped.
pub fn current_dir_display() -> String {
    let dir = current_dir();
    let dir = dir.to_string_lossy();
    let home = dirs::home_dir();
    let home = home.as_ref().map(|p| p.to_string_lossy());
    display_path(&dir, home.as_deref())
}

/// Name of the active Python virtualenv, if any.
pub fn virtualenv_name() -> Option<String> {
    let venv = std::env::var("VIRTUAL_ENV").ok()?;
    if venv.is_empty() {
        return None;
    }
    let name = PathBuf::from(venv)
        .file_name()?
        .to_string_lossy()
        .into_owned();
    Some(name)
}

fn display_path(dir: &str, home: Option<&str>) -> String {
    let mut out = match home {
        // Whole-component prefix only: /home/alicesmith is not under
        // /home/alice
        Some(home) if !home.is_empty() => match dir.strip_prefix(home) {
            Some("") => "~".to_string(),
            Some(rest) if rest.starts_with('/') => format!("~{}", rest),
            _ => dir.to_string(),
        },
        _ => dir.to_string(),
    };
    while out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}
