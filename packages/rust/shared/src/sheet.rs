//! Backend-neutral worksheet write plans.
//!
//! Renderers produce a [`SheetPlan`]; the workbook writer in the core crate
//! replays it into an `.xlsx` file. Keeping the plan as plain data lets the
//! layout be tested without opening a workbook.

use crate::palette::Color;
use crate::types::Page;

/// Name of the hierarchical sheet.
pub const CONTENTS_SHEET: &str = "Contents";

/// Name of the alphabetical sheet.
pub const INDEX_SHEET: &str = "Index";

/// Value written into a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Text(String),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<&Page> for CellValue {
    fn from(page: &Page) -> Self {
        match page {
            Page::Number(n) => CellValue::Number(*n as f64),
            Page::Text(s) => CellValue::Text(s.clone()),
        }
    }
}

/// Visual style of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Bold,
    Italic,
    Fill(Color),
}

impl CellStyle {
    /// Background color, if any.
    pub fn fill(self) -> Option<Color> {
        match self {
            CellStyle::Fill(color) => Some(color),
            _ => None,
        }
    }
}

/// One cell write at a zero-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    pub row: u32,
    pub col: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

/// Ordered cell writes for one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub name: String,
    pub cells: Vec<CellWrite>,
}

impl SheetPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
        }
    }

    /// Append a cell write.
    pub fn push(&mut self, row: u32, col: u16, value: CellValue, style: CellStyle) {
        self.cells.push(CellWrite {
            row,
            col,
            value,
            style,
        });
    }

    /// Number of rows touched, i.e. last row index + 1.
    pub fn row_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.row as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Cells written to `row`, in write order.
    pub fn row(&self, row: u32) -> Vec<&CellWrite> {
        self.cells.iter().filter(|c| c.row == row).collect()
    }

    /// Cell at `(row, col)`, if one was written.
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellWrite> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_tracks_highest_row() {
        let mut plan = SheetPlan::new(CONTENTS_SHEET);
        assert_eq!(plan.row_count(), 0);

        plan.push(0, 0, "Book".into(), CellStyle::Bold);
        plan.push(2, 1, CellValue::Number(4.0), CellStyle::Plain);
        assert_eq!(plan.row_count(), 3);
        assert!(plan.row(1).is_empty());
        assert_eq!(plan.row(2).len(), 1);
    }

    #[test]
    fn cell_lookup() {
        let mut plan = SheetPlan::new(INDEX_SHEET);
        plan.push(0, 3, "Book".into(), CellStyle::Fill(Color(0xFFD700)));

        let cell = plan.cell(0, 3).expect("cell written");
        assert_eq!(cell.style.fill(), Some(Color(0xFFD700)));
        assert!(plan.cell(0, 0).is_none());
    }

    #[test]
    fn page_cell_values() {
        assert_eq!(CellValue::from(&Page::Number(12)), CellValue::Number(12.0));
        assert_eq!(
            CellValue::from(&Page::Text("iv".into())),
            CellValue::Text("iv".into())
        );
    }
}
