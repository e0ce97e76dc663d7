//! End-to-end build: YAML outline → contents → index → `.xlsx`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use sans_index_shared::{BuildConfig, Result};

use crate::contents::render_contents;
use crate::index::render_index;
use crate::loader::load_document;
use crate::workbook::write_workbook;

/// Result of a workbook build.
#[derive(Debug)]
pub struct BuildResult {
    /// Path of the saved workbook.
    pub output_path: PathBuf,
    /// Number of books in the outline.
    pub book_count: usize,
    /// Number of chapters across all books.
    pub chapter_count: usize,
    /// Number of entries, i.e. Index sheet rows.
    pub entry_count: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting build status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the build completes.
    fn done(&self, result: &BuildResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _result: &BuildResult) {}
}

/// Run the full build.
///
/// 1. Load the outline
/// 2. Render the Contents sheet, collecting index records
/// 3. Render the Index sheet
/// 4. Save the workbook
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn build_workbook(
    config: &BuildConfig,
    progress: &dyn ProgressReporter,
) -> Result<BuildResult> {
    let start = Instant::now();
    let output_path = config.output_path()?;

    info!(output = %output_path.display(), "starting build");

    progress.phase("Loading course outline");
    let document = load_document(&config.input)?;

    progress.phase("Rendering contents");
    let (contents, records) = render_contents(&document);

    progress.phase("Rendering index");
    let index = render_index(&records);

    progress.phase("Saving workbook");
    write_workbook(&output_path, &[contents, index])?;

    let result = BuildResult {
        output_path,
        book_count: document.books.len(),
        chapter_count: document.chapter_count(),
        entry_count: records.len(),
        elapsed: start.elapsed(),
    };

    info!(
        books = result.book_count,
        chapters = result.chapter_count,
        entries = result.entry_count,
        "build complete"
    );

    progress.done(&result);
    Ok(result)
}
