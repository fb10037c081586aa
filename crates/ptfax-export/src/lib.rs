//! ptfax-export
//!
//! Fax cover sheet generation: report → view model → rendered text (Tera)
//! → DOCX.

pub mod context;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
