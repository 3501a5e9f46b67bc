//! Prompt segment model and builders.
//!
//! A segment is one colored block of the prompt line. Builders are pure:
//! they turn already-gathered facts into segments and return `None` when
//! a fact is absent, so a missing virtualenv or a clean checkout simply
//! drops out of the prompt.

use crate::theme::Palette;

pub mod cwd;

pub use cwd::cwd;

/// Solid divider drawn between segments of different background.
pub const SEPARATOR: &str = "\u{e0b0}";
/// Thin divider drawn between path components that share a background.
pub const SEPARATOR_THIN: &str = "\u{e0b1}";
/// Collapsed-path marker.
pub const ELLIPSIS: &str = "\u{2026}";
/// Padlock glyph for unwritable directories.
const LOCK: &str = "\u{e0a2}";

/// Replacement divider for the boundary after one segment.
///
/// The glyph and the color it is drawn in always travel together; a
/// segment without an override gets the solid divider in its own
/// background color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorOverride {
    pub glyph: &'static str,
    pub fg: &'static str,
}

/// One colored block of the prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub fg: &'static str,
    pub bg: &'static str,
    pub text: String,
    pub separator: Option<SeparatorOverride>,
}

impl Segment {
    pub fn new(fg: &'static str, bg: &'static str, text: impl Into<String>) -> Self {
        Self {
            fg,
            bg,
            text: text.into(),
            separator: None,
        }
    }

    /// Same block, followed by the thin divider instead of the solid one.
    pub fn with_thin_separator(
        fg: &'static str,
        bg: &'static str,
        text: impl Into<String>,
        separator_fg: &'static str,
    ) -> Self {
        Self {
            fg,
            bg,
            text: text.into(),
            separator: Some(SeparatorOverride {
                glyph: SEPARATOR_THIN,
                fg: separator_fg,
            }),
        }
    }
}

/// Virtualenv name block. An empty name means no active environment.
pub fn virtualenv(name: &str, palette: &Palette) -> Option<Segment> {
    if name.is_empty() {
        return None;
    }
    Some(Segment::new(
        palette.virtualenv.fg,
        palette.virtualenv.bg,
        name,
    ))
}

/// Padlock block shown when the working directory is not writable.
pub fn write_lock(writable: bool, palette: &Palette) -> Option<Segment> {
    if writable {
        return None;
    }
    Some(Segment::new(palette.lock.fg, palette.lock.bg, LOCK))
}

/// Version-control block. An empty summary means no repository.
pub fn vcs(summary: &str, dirty: bool, palette: &Palette) -> Option<Segment> {
    if summary.is_empty() {
        return None;
    }
    let pair = if dirty {
        palette.vcs_dirty
    } else {
        palette.vcs_clean
    };
    Some(Segment::new(pair.fg, pair.bg, summary))
}

/// Trailing command-prompt block.
pub fn terminator(glyph: &str, palette: &Palette) -> Segment {
    Segment::new(palette.prompt.fg, palette.prompt.bg, glyph)
}
