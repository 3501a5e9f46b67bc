//! Prompt line assembly.
//!
//! Each segment is emitted as `fg bg ␣text␣` followed by the divider
//! transition: the next segment's background (so the solid divider's
//! empty half takes the upcoming color), then the divider's own
//! foreground, then the glyph. The last segment transitions into the
//! reset sequence instead of a background, and one final reset closes
//! the line.

use crate::segments::{Segment, SEPARATOR};
use crate::shell::ShellStyle;

/// Render segments into a single prompt line for the given shell.
///
/// Total over any input: an empty segment list renders as just the
/// reset sequence.
pub fn render(segments: &[Segment], style: &ShellStyle) -> String {
    let mut out = String::new();

    for (i, segment) in segments.iter().enumerate() {
        out.push_str(&style.fg(segment.fg));
        out.push_str(&style.bg(segment.bg));
        out.push(' ');
        out.push_str(&segment.text);
        out.push(' ');

        match segments.get(i + 1) {
            Some(next) => out.push_str(&style.bg(next.bg)),
            None => out.push_str(style.reset),
        }

        match &segment.separator {
            Some(sep) => {
                out.push_str(&style.fg(sep.fg));
                out.push_str(sep.glyph);
            }
            None => {
                out.push_str(&style.fg(segment.bg));
                out.push_str(SEPARATOR);
            }
        }
    }

    out.push_str(style.reset);
    out
}
