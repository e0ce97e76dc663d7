//! YAML course outline loader.
//!
//! The outline is a sequence of single-key mappings, nested three deep:
//!
//! ```yaml
//! - Book 1 - Foundations:
//!     - Networking:
//!         - 12: TCP handshake
//!         - 15: ARP spoofing
//! ```
//!
//! Each single-key mapping becomes an explicit `{name, children}` record.
//! Mappings with zero or several keys are rejected, never guessed at.
//!
//! Bare numeric titles, names and topics are stringified from the parsed
//! number, not the source text: `1.10` becomes `"1.1"`. Quote them
//! (`"1.10":`) to keep them verbatim.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::{debug, instrument};

use sans_index_shared::{Book, Chapter, Document, Entry, Page, Result, SansIndexError};

/// Read and parse the outline at `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| SansIndexError::io(path, e))?;
    let document = parse_document(&content)?;

    debug!(
        books = document.books.len(),
        chapters = document.chapter_count(),
        entries = document.entry_count(),
        "outline loaded"
    );

    Ok(document)
}

/// Parse an outline from YAML text.
pub fn parse_document(content: &str) -> Result<Document> {
    if content.trim().is_empty() {
        return Err(SansIndexError::malformed("document is empty"));
    }

    let root: Value =
        serde_yaml::from_str(content).map_err(|e| SansIndexError::parse(e.to_string()))?;

    let books = match &root {
        Value::Sequence(items) => items,
        Value::Null => return Err(SansIndexError::malformed("document is empty")),
        other => {
            return Err(SansIndexError::malformed(format!(
                "expected a sequence of books at the top level, found {}",
                kind(other)
            )));
        }
    };

    let books = books
        .iter()
        .enumerate()
        .map(|(i, value)| parse_book(i + 1, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Document { books })
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

fn parse_book(ordinal: usize, value: &Value) -> Result<Book> {
    let at = format!("book {ordinal}");
    let (key, children) = single_pair(value, &at)?;
    let title = scalar_text(key, "a title", &at)?;

    let at = format!("book {ordinal} ({title:?})");
    let chapters = children_of(children, "chapters", &at)?
        .iter()
        .enumerate()
        .map(|(i, value)| parse_chapter(&at, i + 1, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Book { title, chapters })
}

fn parse_chapter(parent: &str, ordinal: usize, value: &Value) -> Result<Chapter> {
    let at = format!("{parent}, chapter {ordinal}");
    let (key, children) = single_pair(value, &at)?;
    let name = scalar_text(key, "a name", &at)?;

    let at = format!("{parent}, chapter {ordinal} ({name:?})");
    let entries = children_of(children, "entries", &at)?
        .iter()
        .enumerate()
        .map(|(i, value)| parse_entry(&at, i + 1, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Chapter { name, entries })
}

fn parse_entry(parent: &str, ordinal: usize, value: &Value) -> Result<Entry> {
    let at = format!("{parent}, entry {ordinal}");
    let (key, topic) = single_pair(value, &at)?;

    Ok(Entry {
        page: page(key, &at)?,
        topic: scalar_text(topic, "a topic", &at)?,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap a mapping that must hold exactly one key.
fn single_pair<'a>(value: &'a Value, at: &str) -> Result<(&'a Value, &'a Value)> {
    let mapping: &Mapping = match value {
        Value::Mapping(m) => m,
        other => {
            return Err(SansIndexError::malformed(format!(
                "{at}: expected a single-key mapping, found {}",
                kind(other)
            )));
        }
    };

    let mut pairs = mapping.iter();
    match (pairs.next(), pairs.next()) {
        (Some(pair), None) => Ok(pair),
        _ => Err(SansIndexError::malformed(format!(
            "{at}: expected a single-key mapping, found {} keys",
            mapping.len()
        ))),
    }
}

fn children_of<'a>(value: &'a Value, what: &str, at: &str) -> Result<&'a [Value]> {
    match value {
        Value::Sequence(items) => Ok(items),
        other => Err(SansIndexError::malformed(format!(
            "{at}: expected a sequence of {what}, found {}",
            kind(other)
        ))),
    }
}

/// Names and topics: strings, or numbers written bare.
fn scalar_text(value: &Value, what: &str, at: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(SansIndexError::malformed(format!(
            "{at}: expected {what}, found {}",
            kind(other)
        ))),
    }
}

fn page(value: &Value, at: &str) -> Result<Page> {
    match value {
        Value::String(s) => Ok(Page::Text(s.clone())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Page::Number(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    Ok(Page::Number(f as i64))
                }
                _ => Err(SansIndexError::malformed(format!(
                    "{at}: page number {n} is not a whole number"
                ))),
            }
        }
        other => Err(SansIndexError::malformed(format!(
            "{at}: expected a page number, found {}",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
