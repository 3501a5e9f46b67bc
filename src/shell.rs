//! Per-shell escape templates.
//!
//! A prompt string is read back by the shell before the terminal ever sees
//! it, so every color escape has to be wrapped in the shell's own
//! zero-width markers (`\[..\]` for bash, `%{..%}` for zsh) or the shell
//! will miscount the prompt width and wrap lines in the wrong place.

/// Shells with known escape syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    /// Unknown shell: all escapes degrade to plain text.
    Plain,
}

impl Shell {
    /// Look up a shell by name. Matching is exact; anything unknown
    /// renders without escapes rather than guessing.
    pub fn resolve(name: &str) -> Self {
        match name {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            _ => Shell::Plain,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Plain => "plain",
        }
    }

    /// Escape templates for this shell.
    pub fn style(self) -> ShellStyle {
        match self {
            // PS1 is evaluated by bash: `\[`/`\]` mark a zero-width run
            // and `\e` becomes the escape byte at display time.
            Shell::Bash => ShellStyle {
                wrap_open: "\\[\\e",
                wrap_close: "\\]",
                color_open: "[",
                reset: "\\[\\e[0m\\]",
                prompt_glyph: "\\$",
            },
            // zsh gets the escape byte verbatim inside `%{`/`%}`.
            Shell::Zsh => ShellStyle {
                wrap_open: "%{\u{1b}",
                wrap_close: "%}",
                color_open: "[",
                reset: "%{$reset_color%}",
                prompt_glyph: "%#",
            },
            Shell::Plain => ShellStyle {
                wrap_open: "",
                wrap_close: "",
                color_open: "",
                reset: "",
                prompt_glyph: "$",
            },
        }
    }
}

/// Escape templates for one shell.
///
/// An empty `color_open` disables color entirely: both color methods
/// return the empty string and the prompt degrades to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellStyle {
    wrap_open: &'static str,
    wrap_close: &'static str,
    color_open: &'static str,
    /// Sequence that returns the terminal to its default colors.
    pub reset: &'static str,
    /// The shell's command-prompt character, used as the final segment.
    pub prompt_glyph: &'static str,
}

impl ShellStyle {
    /// Escape selecting an 8-bit foreground color.
    pub fn fg(&self, color: &str) -> String {
        self.color("38", color)
    }

    /// Escape selecting an 8-bit background color.
    pub fn bg(&self, color: &str) -> String {
        self.color("48", color)
    }

    fn color(&self, layer: &str, color: &str) -> String {
        if self.color_open.is_empty() {
            return String::new();
        }
        format!(
            "{}{}{};5;{}m{}",
            self.wrap_open, self.color_open, layer, color, self.wrap_close
        )
    }
}
