//! Development tasks, run as `cargo xtask <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Debug, Parser)]
#[command(about = "promptline development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Render the man page into target/dist/man
    Man,
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man => generate_man(),
    }
}

fn generate_man() -> Result<()> {
    let out_dir = PathBuf::from("target/dist/man");
    fs::create_dir_all(&out_dir).context("Failed to create man output directory")?;

    let cmd = promptline::cli::Cli::command();
    let mut buffer: Vec<u8> = Vec::new();
    Man::new(cmd)
        .render(&mut buffer)
        .context("Failed to render man page")?;

    let path = out_dir.join("promptline.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
