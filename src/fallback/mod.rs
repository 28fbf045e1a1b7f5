//! Deterministic stand-ins for the AI helpers.
//!
//! Everything here is a pure function of its inputs: no I/O, no randomness,
//! and no failure path.

pub mod keywords;
pub mod meta;
pub mod titles;

pub use keywords::{fallback_keywords, DEFAULT_KEYWORDS, MAX_FALLBACK_KEYWORDS};
pub use meta::{clamp_description, fallback_meta_description, META_DESCRIPTION_MAX};
pub use titles::{fallback_titles, TITLE_COUNT};

use crate::OptimizationReport;

/// Report returned when no analysis could be obtained.
pub fn fallback_optimization() -> OptimizationReport {
    OptimizationReport::default()
}
