//! Outline loading, sheet rendering and workbook output for sans-index.
//!
//! This crate ties the stages together into [`pipeline::build_workbook`]:
//! load a YAML outline, render the Contents and Index sheets, save `.xlsx`.

pub mod contents;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod workbook;
