//! `.xlsx` file store backed by `umya-spreadsheet`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};
use umya_spreadsheet::{Cell, Spreadsheet, Worksheet};

use super::WorkbookStore;
use crate::error::{WorkbookError, WorkbookResult};
use crate::model::{CellValue, Sheet, Workbook};

/// Store reading and writing one `.xlsx` file.
///
/// Saving reopens the file and only rewrites cells whose value changed, so
/// formulas, formatting and unrelated sheets survive.
#[derive(Debug, Clone)]
pub struct XlsxStore {
    path: PathBuf,
}

impl XlsxStore {
    /// Creates a store for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the workbook file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> WorkbookResult<Spreadsheet> {
        umya_spreadsheet::reader::xlsx::read(&self.path).map_err(|e| {
            WorkbookError::persistence(format!("cannot read {}: {e}", self.path.display()))
        })
    }
}

impl WorkbookStore for XlsxStore {
    fn load(&self) -> WorkbookResult<Workbook> {
        let book = self.open()?;
        let mut workbook = Workbook::new();

        for worksheet in book.get_sheet_collection() {
            let sheet = workbook.sheet_or_insert(worksheet.get_name());
            read_sheet(worksheet, sheet);
        }

        info!(
            path = %self.path.display(),
            sheets = ?workbook.sheet_names(),
            "Loaded workbook"
        );
        Ok(workbook)
    }

    fn save(&self, workbook: &Workbook) -> WorkbookResult<()> {
        let mut book = if self.path.exists() {
            self.open()?
        } else {
            umya_spreadsheet::new_file_empty_worksheet()
        };

        for sheet in workbook.sheets() {
            if book.get_sheet_by_name(sheet.name()).is_none() {
                book.new_sheet(sheet.name()).map_err(|e| {
                    WorkbookError::persistence(format!("cannot add sheet {}: {e}", sheet.name()))
                })?;
                debug!(sheet = sheet.name(), "Added sheet");
            }
            let worksheet = book
                .get_sheet_by_name_mut(sheet.name())
                .ok_or_else(|| WorkbookError::missing_sheet(sheet.name()))?;
            write_sheet(sheet, worksheet)?;
        }

        umya_spreadsheet::writer::xlsx::write(&book, &self.path).map_err(|e| {
            WorkbookError::persistence(format!("cannot write {}: {e}", self.path.display()))
        })?;

        info!(path = %self.path.display(), "Saved workbook");
        Ok(())
    }
}

fn read_sheet(worksheet: &Worksheet, sheet: &mut Sheet) {
    let (last_column, last_row) = worksheet.get_highest_column_and_row();
    for row in 1..=last_row {
        for column in 1..=last_column {
            if let Some(cell) = worksheet.get_cell((column, row)) {
                sheet.set(row, column, read_cell(cell));
            }
        }
    }
}

fn read_cell(cell: &Cell) -> CellValue {
    let raw = cell.get_value();
    if raw.trim().is_empty() {
        return CellValue::Empty;
    }
    match cell.get_data_type() {
        "n" => Decimal::from_str(raw.trim())
            .or_else(|_| Decimal::from_scientific(raw.trim()))
            .map_or_else(|_| CellValue::Text(raw.to_string()), CellValue::Number),
        "b" => CellValue::Bool(matches!(raw.trim(), "1" | "TRUE" | "true")),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Writes only the cells whose value differs from what the file holds.
///
/// Unchanged cells keep their formulas and styles. A formula cell is only
/// replaced when the model now holds a different value for it.
fn write_sheet(sheet: &Sheet, worksheet: &mut Worksheet) -> WorkbookResult<()> {
    // Blank out cells the model no longer holds.
    let (last_column, last_row) = worksheet.get_highest_column_and_row();
    for row in 1..=last_row {
        for column in 1..=last_column {
            let stale = worksheet
                .get_cell((column, row))
                .is_some_and(|cell| !read_cell(cell).is_empty());
            if stale && sheet.cell(row, column).is_empty() {
                worksheet.get_cell_mut((column, row)).set_value_string("");
            }
        }
    }

    let mut written = 0_usize;
    for ((row, column), value) in sheet.cells() {
        let unchanged = worksheet
            .get_cell((column, row))
            .is_some_and(|cell| read_cell(cell) == *value);
        if unchanged {
            continue;
        }
        let cell = worksheet.get_cell_mut((column, row));
        match value {
            CellValue::Empty => {
                cell.set_value_string("");
            }
            CellValue::Number(n) => {
                let number = n.to_f64().ok_or_else(|| {
                    WorkbookError::persistence(format!(
                        "value {n} at {}!R{row}C{column} does not fit a spreadsheet number",
                        sheet.name()
                    ))
                })?;
                cell.set_value_number(number);
            }
            CellValue::Text(s) => {
                cell.set_value_string(s.as_str());
            }
            CellValue::Bool(b) => {
                cell.set_value_bool(*b);
            }
        }
        written += 1;
    }
    debug!(sheet = sheet.name(), cells = written, "Wrote changed cells");
    Ok(())
}
