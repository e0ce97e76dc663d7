//! Core domain types for course outlines and their index.

use std::fmt;

use crate::palette::Color;

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// A parsed course outline: books in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub books: Vec<Book>,
}

impl Document {
    /// Number of chapters across all books.
    pub fn chapter_count(&self) -> usize {
        self.books.iter().map(|b| b.chapters.len()).sum()
    }

    /// Number of leaf entries across all books and chapters.
    pub fn entry_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| &b.chapters)
            .map(|c| c.entries.len())
            .sum()
    }
}

/// A top-level book with its chapters in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub chapters: Vec<Chapter>,
}

/// A chapter with its page/topic entries in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// A single `page: topic` leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub page: Page,
    pub topic: String,
}

/// Page reference: usually a number, sometimes a label like `"12-14"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Number(i64),
    Text(String),
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Number(n) => write!(f, "{n}"),
            Page::Text(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// IndexRecord
// ---------------------------------------------------------------------------

/// Flattened copy of one entry, carrying the colors its book and chapter
/// were rendered with on the Contents sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRecord {
    pub book: String,
    pub book_color: Color,
    pub chapter: String,
    pub chapter_color: Color,
    pub page: Page,
    pub topic: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(page: i64, topic: &str) -> Entry {
        Entry {
            page: Page::Number(page),
            topic: topic.into(),
        }
    }

    #[test]
    fn document_counts() {
        let doc = Document {
            books: vec![
                Book {
                    title: "Book A".into(),
                    chapters: vec![
                        Chapter {
                            name: "Intro".into(),
                            entries: vec![entry(1, "alpha"), entry(2, "beta")],
                        },
                        Chapter {
                            name: "Empty".into(),
                            entries: vec![],
                        },
                    ],
                },
                Book {
                    title: "Book B".into(),
                    chapters: vec![Chapter {
                        name: "Only".into(),
                        entries: vec![entry(7, "gamma")],
                    }],
                },
            ],
        };

        assert_eq!(doc.chapter_count(), 3);
        assert_eq!(doc.entry_count(), 3);
        assert_eq!(Document::default().entry_count(), 0);
    }

    #[test]
    fn page_display() {
        assert_eq!(Page::Number(42).to_string(), "42");
        assert_eq!(Page::Text("12-14".into()).to_string(), "12-14");
    }
}
