//! Contents sheet renderer.
//!
//! Walks the outline once, top to bottom, and lays it out as:
//!
//! ```text
//! | Book title (bold) |                       |        |
//! | [book]            | Chapter name (italic) |        |
//! | [book]            | page [chapter]        | topic  |
//! ```
//!
//! Every leaf is also collected as an [`IndexRecord`] for the Index sheet.

use tracing::{debug, instrument, trace};

use sans_index_shared::{
    CONTENTS_SHEET, CellStyle, CellValue, ColorCycler, Document, IndexRecord, SheetPlan,
};

/// Render the Contents sheet with the standard book and chapter rotations.
pub fn render_contents(document: &Document) -> (SheetPlan, Vec<IndexRecord>) {
    render_contents_with(document, ColorCycler::books(), ColorCycler::chapters())
}

/// Render the Contents sheet using the given color selectors.
///
/// `books` advances once per book and `chapters` once per chapter, so a
/// chapter's color does not depend on which book it sits in.
#[instrument(skip_all, fields(books = document.books.len()))]
pub fn render_contents_with(
    document: &Document,
    mut books: ColorCycler,
    mut chapters: ColorCycler,
) -> (SheetPlan, Vec<IndexRecord>) {
    let mut plan = SheetPlan::new(CONTENTS_SHEET);
    let mut records = Vec::with_capacity(document.entry_count());
    let mut row: u32 = 0;

    for book in &document.books {
        let book_color = books.next_color();

        plan.push(row, 0, book.title.as_str().into(), CellStyle::Bold);
        row += 1;

        for chapter in &book.chapters {
            let chapter_color = chapters.next_color();

            plan.push(row, 0, CellValue::Blank, CellStyle::Fill(book_color));
            plan.push(row, 1, chapter.name.as_str().into(), CellStyle::Italic);
            row += 1;

            for entry in &chapter.entries {
                plan.push(row, 0, CellValue::Blank, CellStyle::Fill(book_color));
                plan.push(row, 1, (&entry.page).into(), CellStyle::Fill(chapter_color));
                plan.push(row, 2, entry.topic.as_str().into(), CellStyle::Plain);
                row += 1;

                trace!(page = %entry.page, topic = %entry.topic, "entry rendered");

                records.push(IndexRecord {
                    book: book.title.clone(),
                    book_color,
                    chapter: chapter.name.clone(),
                    chapter_color,
                    page: entry.page.clone(),
                    topic: entry.topic.clone(),
                });
            }

            debug!(
                chapter = %chapter.name,
                color = %chapter_color,
                entries = chapter.entries.len(),
                "chapter rendered"
            );
        }

        debug!(book = %book.title, color = %book_color, "book rendered");
    }

    (plan, records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
