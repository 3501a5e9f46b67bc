//! promptline entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use promptline::cli::{Cli, Commands, ConfigAction};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::handle_init(),
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Some(Commands::Doctor { json }) => {
            commands::doctor::handle(cli.shell.as_deref(), cli.theme.as_deref(), json)
        }
        Some(Commands::Completions { generator }) => commands::completions::handle(generator),
        None => commands::prompt::handle(cli.shell.as_deref(), cli.theme.as_deref()),
    }
}

/// Route diagnostics to stderr, gated by `RUST_LOG`. The default is
/// silence: a prompt renderer runs on every keystroke of Enter and must
/// not chat on stderr.
#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
