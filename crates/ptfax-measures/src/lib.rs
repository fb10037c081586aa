//! ptfax-measures
//!
//! Objective measurement logic. Pure computation — no rendering, no I/O.
//! Parses raw form values, computes improvement between an initial and a
//! current observation, and manages the rows of an editing session.

pub mod error;
pub mod improvement;
pub mod parse;
pub mod presets;
pub mod session;
pub mod summary;
pub mod validate;

pub use improvement::{Direction, Improvement, ImprovementKind, calculate, report_improvement};
