//! Default command: render the prompt line.

use std::io::{self, Write};

use anyhow::Result;

use promptline::render::render;
use promptline::segments::{cwd, terminator, vcs, virtualenv, write_lock, Segment};
use promptline::shell::{Shell, ShellStyle};
use promptline::sources::{env, git, writable};
use promptline::theme::Palette;
use promptline::Config;

/// Build and print the prompt for the resolved shell and palette.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell_flag: Option<&str>, theme_flag: Option<&str>) -> Result<()> {
    // A broken config file must not take the prompt down with it
    let config = Config::load().unwrap_or_else(|err| {
        tracing::debug!("config unavailable, using defaults: {}", err);
        Config::default()
    });

    let style = Shell::resolve(&config.shell_name(shell_flag)).style();
    let palette = Palette::resolve(&config.theme_name(theme_flag));

    let line = render(&build_segments(&style, &palette), &style);

    // PS1 substitution must not see a newline; only add one for eyes
    if atty::is(atty::Stream::Stdout) {
        println!("{}", line);
    } else {
        print!("{}", line);
        io::stdout().flush()?;
    }
    Ok(())
}

/// Gather facts and compose the segment sequence: virtualenv, working
/// directory, write lock, VCS, prompt terminator.
fn build_segments(style: &ShellStyle, palette: &Palette) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    if let Some(name) = env::virtualenv_name() {
        segments.extend(virtualenv(&name, palette));
    }

    segments.extend(cwd(&env::current_dir_display(), palette));
    segments.extend(write_lock(writable::is_writable(&env::current_dir()), palette));

    let status = git::probe();
    segments.extend(vcs(&status.summary, status.dirty, palette));

    segments.push(terminator(style.prompt_glyph, palette));
    segments
}
