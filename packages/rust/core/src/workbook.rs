//! `.xlsx` output: replays sheet plans into a `rust_xlsxwriter` workbook.

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Color as XlsxColor, Format, Workbook, Worksheet, XlsxError};
use tracing::{debug, info, instrument};

use sans_index_shared::{
    CellStyle, CellValue, CellWrite, Color, Result, SansIndexError, SheetPlan,
};

/// Cell formats shared by every sheet in one workbook.
struct Formats {
    bold: Format,
    italic: Format,
    fills: HashMap<Color, Format>,
}

impl Formats {
    fn for_plans(plans: &[SheetPlan]) -> Self {
        let mut fills = HashMap::new();
        for color in plans
            .iter()
            .flat_map(|p| &p.cells)
            .filter_map(|c| c.style.fill())
        {
            fills.entry(color).or_insert_with(|| {
                Format::new().set_background_color(XlsxColor::RGB(color.rgb()))
            });
        }

        Self {
            bold: Format::new().set_bold(),
            italic: Format::new().set_italic(),
            fills,
        }
    }

    fn get(&self, style: CellStyle) -> Option<&Format> {
        match style {
            CellStyle::Plain => None,
            CellStyle::Bold => Some(&self.bold),
            CellStyle::Italic => Some(&self.italic),
            CellStyle::Fill(color) => self.fills.get(&color),
        }
    }
}

/// Write `plans` as worksheets, in order, and save the workbook to `path`.
#[instrument(skip_all, fields(path = %path.display(), sheets = plans.len()))]
pub fn write_workbook(path: &Path, plans: &[SheetPlan]) -> Result<()> {
    let formats = Formats::for_plans(plans);
    let mut workbook = Workbook::new();

    for plan in plans {
        let worksheet = workbook
            .add_worksheet()
            .set_name(&plan.name)
            .map_err(|e| SansIndexError::write(path, e))?;

        for cell in &plan.cells {
            write_cell(worksheet, cell, &formats).map_err(|e| SansIndexError::write(path, e))?;
        }

        debug!(sheet = %plan.name, cells = plan.cells.len(), "sheet written");
    }

    workbook
        .save(path)
        .map_err(|e| SansIndexError::write(path, e))?;

    info!(path = %path.display(), "workbook saved");
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    cell: &CellWrite,
    formats: &Formats,
) -> std::result::Result<(), XlsxError> {
    let (row, col) = (cell.row, cell.col);

    match (&cell.value, formats.get(cell.style)) {
        (CellValue::Blank, None) => {}
        (CellValue::Blank, Some(format)) => {
            worksheet.write_blank(row, col, format)?;
        }
        (CellValue::Text(text), None) => {
            worksheet.write_string(row, col, text)?;
        }
        (CellValue::Text(text), Some(format)) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        (CellValue::Number(n), None) => {
            worksheet.write_number(row, col, *n)?;
        }
        (CellValue::Number(n), Some(format)) => {
            worksheet.write_number_with_format(row, col, *n, format)?;
        }
    }
    Ok(())
}
