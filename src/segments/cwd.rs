//! Working-directory segments.
//!
//! Long paths are collapsed instead of truncated: the first component
//! after the root (or after `~`) stays visible, an ellipsis stands in for
//! everything in between, and the current directory always keeps its full
//! name. Components that share the grey path background are divided by
//! the thin separator; the `~` block keeps the solid one because its
//! background differs.

use super::{Segment, ELLIPSIS};
use crate::theme::Palette;

/// Split a display path (absolute, or `~`-prefixed) into prompt segments.
///
/// The input is expected to already have its home prefix abbreviated to
/// `~`; trailing slashes are tolerated so `/` and an empty string both
/// mean the filesystem root.
pub fn cwd(path: &str, palette: &Palette) -> Vec<Segment> {
    let mut parts: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    let mut segments = Vec::new();

    let home = parts.first() == Some(&"~");
    if home {
        parts.remove(0);
        segments.push(Segment::new(palette.home.fg, palette.home.bg, "~"));
    }

    let pair = palette.path;
    let thin =
        |text: &str| Segment::with_thin_separator(pair.fg, pair.bg, text, palette.separator_fg);

    // Inside home the components are all real; an absolute path starts
    // with an empty component from the leading slash, so the first real
    // one sits at index 1 and every threshold shifts up by one.
    if home {
        if parts.len() >= 3 {
            segments.push(thin(parts[0]));
            segments.push(thin(ELLIPSIS));
        } else if parts.len() == 2 {
            segments.push(thin(parts[0]));
        }
    } else if parts.len() >= 4 {
        segments.push(thin(parts[1]));
        segments.push(thin(ELLIPSIS));
    } else if parts.len() == 3 {
        segments.push(thin(parts[1]));
    }

    match parts.last() {
        Some(&"") => {
            // Only the root collapses to an empty final component
            segments.push(Segment::new(pair.fg, pair.bg, "/"));
        }
        Some(last) => segments.push(Segment::new(pair.fg, pair.bg, *last)),
        // Bare `~` leaves nothing behind after the shift
        None => {}
    }

    segments
}
