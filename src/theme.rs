//! Color palettes for prompt segments.
//!
//! Colors are 8-bit terminal palette indices kept as strings, ready to be
//! spliced into `38;5;N` / `48;5;N` SGR parameters by the shell styles.

/// Foreground/background pair for one segment role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: &'static str,
    pub bg: &'static str,
}

/// Segment colors for one prompt palette.
///
/// Every segment role the prompt can produce has a fixed pair here;
/// segments never carry colors of their own choosing.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// The `~` block shown when the working directory is under home.
    pub home: ColorPair,
    /// All other working-directory blocks, including the ellipsis.
    pub path: ColorPair,
    /// Active Python virtualenv name.
    pub virtualenv: ColorPair,
    /// Padlock shown when the working directory is not writable.
    pub lock: ColorPair,
    /// VCS block when the working tree has nothing to commit.
    pub vcs_clean: ColorPair,
    /// VCS block when the working tree has pending changes.
    pub vcs_dirty: ColorPair,
    /// Trailing command-prompt block.
    pub prompt: ColorPair,
    /// Foreground for the thin divider between path blocks.
    pub separator_fg: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    /// Palette for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            home: ColorPair { fg: "15", bg: "31" },
            path: ColorPair {
                fg: "250",
                bg: "237",
            },
            virtualenv: ColorPair { fg: "00", bg: "35" },
            lock: ColorPair {
                fg: "254",
                bg: "124",
            },
            vcs_clean: ColorPair { fg: "0", bg: "148" },
            vcs_dirty: ColorPair {
                fg: "15",
                bg: "161",
            },
            prompt: ColorPair {
                fg: "15",
                bg: "236",
            },
            separator_fg: "244",
        }
    }

    /// Palette for light terminal backgrounds.
    ///
    /// The grey path blocks are re-voiced for a light background; the
    /// accent roles read fine on either and stay as in `dark`.
    pub fn light() -> Self {
        Self {
            home: ColorPair { fg: "15", bg: "31" },
            path: ColorPair {
                fg: "240",
                bg: "252",
            },
            virtualenv: ColorPair { fg: "00", bg: "35" },
            lock: ColorPair {
                fg: "254",
                bg: "124",
            },
            vcs_clean: ColorPair { fg: "0", bg: "148" },
            vcs_dirty: ColorPair {
                fg: "15",
                bg: "161",
            },
            prompt: ColorPair {
                fg: "236",
                bg: "254",
            },
            separator_fg: "247",
        }
    }

    /// Look up a palette by name.
    ///
    /// Matching is exact; anything that is not a known name falls back
    /// to the dark palette.
    pub fn resolve(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
