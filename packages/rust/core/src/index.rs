//! Index sheet renderer: every entry, alphabetised by topic.

use tracing::{debug, instrument};

use sans_index_shared::{CellStyle, CellValue, INDEX_SHEET, IndexRecord, SheetPlan};

/// Sort records by topic, ignoring case.
///
/// The sort is stable: records whose topics compare equal keep their
/// traversal order.
pub fn sort_index_records(records: &mut [IndexRecord]) {
    records.sort_by_cached_key(|r| r.topic.to_lowercase());
}

/// Render the Index sheet from records collected by the contents pass.
///
/// Columns: topic, page and chapter (chapter color), book (book color).
#[instrument(skip_all, fields(records = records.len()))]
pub fn render_index(records: &[IndexRecord]) -> SheetPlan {
    let mut sorted = records.to_vec();
    sort_index_records(&mut sorted);

    let mut plan = SheetPlan::new(INDEX_SHEET);
    for (row, record) in (0u32..).zip(&sorted) {
        let chapter_fill = CellStyle::Fill(record.chapter_color);

        plan.push(row, 0, record.topic.as_str().into(), CellStyle::Plain);
        plan.push(row, 1, (&record.page).into(), chapter_fill);
        plan.push(row, 2, record.chapter.as_str().into(), chapter_fill);
        plan.push(
            row,
            3,
            record.book.as_str().into(),
            CellStyle::Fill(record.book_color),
        );
    }

    debug!(rows = sorted.len(), "index rendered");
    plan
}
