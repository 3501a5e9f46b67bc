//! Powerline-style prompt rendering for bash and zsh.
//!
//! The pipeline is deliberately small: `sources` gathers plain facts
//! from the environment, `segments` turns facts into colored blocks,
//! and `render` folds the blocks into one escaped prompt line for the
//! shell selected via `shell` and colored via `theme`.

pub mod cli;
pub mod config;
pub mod render;
pub mod segments;
pub mod shell;
pub mod sources;
pub mod theme;

pub use config::Config;
