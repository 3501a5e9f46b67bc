//! Fact gathering for prompt segments.
//!
//! Everything under here touches the process environment, the
//! filesystem, or git. Failures never propagate: they translate into
//! empty or negative defaults so the prompt still renders.

pub mod env;
pub mod git;
pub mod writable;
