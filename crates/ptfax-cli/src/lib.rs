//! ptfax-cli library root.
//!
//! Exposes the command implementations and config handling so integration
//! tests can exercise them without spawning the binary.

pub mod commands;
pub mod config;
