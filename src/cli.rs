//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Version string for `--version`.
///
/// Dev builds append the git commit and build date; official builds
/// (made with `--features release`) show the bare version.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            sha,
            env!("PROMPTLINE_BUILD_DATE")
        ),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Powerline-style prompt generator for bash and zsh.
///
/// Without a subcommand, renders the prompt line for the current
/// directory to stdout, ready for PS1 command substitution.
#[derive(Debug, Parser)]
#[command(name = "promptline", version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Shell whose escape syntax to emit (bash, zsh; anything else
    /// renders plain text)
    #[arg(short, long, global = true)]
    pub shell: Option<String>,

    /// Color palette (dark, light)
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Report the facts the prompt would be built from
    Doctor {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        generator: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Create the config file with default settings
    Init,
    /// Print the current configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
