//! Git working-tree status for the VCS segment.
//!
//! Shells out to `git status` once per prompt and reads the porcelain-free
//! human output; that keeps the summary identical to what the user sees
//! when they run the command themselves.

use std::process::Command;

use regex::Regex;
use tracing::debug;

/// First line of `git status`: branch name, or the word `detached`.
const BRANCH_PATTERN: &str = r"^(HEAD|On branch) (\S+)";
/// Tracking line: direction and commit count relative to upstream.
const TRACKING_PATTERN: &str = r"Your branch is (ahead|behind).*?([0-9]+) comm";

const AHEAD_ARROW: &str = "\u{21e1}";
const BEHIND_ARROW: &str = "\u{21e3}";

/// Summary of the working tree for the VCS segment.
///
/// An empty summary means there is no repository here (or no git at
/// all) and no segment should be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcsStatus {
    pub summary: String,
    pub dirty: bool,
}

/// Run `git status` in the current directory and parse it.
///
/// Spawn failures and non-repository directories both come back as the
/// empty status.
pub fn probe() -> VcsStatus {
    let output = match Command::new("git")
        .args(["status", "--ignore-submodules"])
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            debug!("git not available: {}", err);
            return VcsStatus::default();
        }
    };
    // Outside a repository git prints nothing on stdout; parsing the
    // empty string yields the empty status without special-casing.
    parse(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `git status` output into a segment summary.
pub fn parse(output: &str) -> VcsStatus {
    let branch_re = Regex::new(BRANCH_PATTERN).expect("Branch pattern should be valid");
    let tracking_re = Regex::new(TRACKING_PATTERN).expect("Tracking pattern should be valid");

    let mut summary = String::new();

    if let Some(captures) = branch_re.captures(output) {
        let name = &captures[2];
        if name == "detached" {
            summary.push_str("(Detached)");
        } else {
            summary.push_str(name);
        }
    }

    if let Some(captures) = tracking_re.captures(output) {
        summary.push(' ');
        summary.push_str(&captures[2]);
        match &captures[1] {
            "ahead" => summary.push_str(AHEAD_ARROW),
            _ => summary.push_str(BEHIND_ARROW),
        }
    }

    if output.contains("Untracked files") {
        summary.push_str(" +");
    }

    VcsStatus {
        summary,
        dirty: !output.contains("nothing to commit"),
    }
}
