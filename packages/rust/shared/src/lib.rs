//! Shared types, error model, and configuration for sans-index.
//!
//! This crate is the foundation depended on by the other sans-index crates.
//! It provides:
//! - [`SansIndexError`]: the unified error type
//! - Outline types ([`Document`], [`Book`], [`Chapter`], [`Entry`], [`IndexRecord`])
//! - The band palette ([`Color`], [`ColorCycler`])
//! - Sheet write plans ([`SheetPlan`], [`CellWrite`])
//! - Runtime configuration ([`BuildConfig`])

pub mod config;
pub mod error;
pub mod palette;
pub mod sheet;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{BuildConfig, OUTPUT_EXTENSION, output_file_name};
pub use error::{Result, SansIndexError};
pub use palette::{Color, ColorCycler, PALETTE};
pub use sheet::{CONTENTS_SHEET, CellStyle, CellValue, CellWrite, INDEX_SHEET, SheetPlan};
pub use types::{Book, Chapter, Document, Entry, IndexRecord, Page};
