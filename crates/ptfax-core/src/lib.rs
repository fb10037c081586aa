//! ptfax-core
//!
//! Pure domain types for the physical-therapy progress report: measurement
//! rows, the report form, and date conventions. No rendering or I/O — this is
//! the shared vocabulary of the ptfax workspace.

pub mod dates;
pub mod error;
pub mod models;
