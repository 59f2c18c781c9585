//! In-memory workbook model.
//!
//! A workbook is an ordered list of sheets; a sheet is a sparse grid of cells
//! addressed by 1-based `(row, column)`, as in the spreadsheet UI.

use std::collections::BTreeMap;
use std::fmt;

use ledgerbook_shared::AccountCode;
use rust_decimal::Decimal;

use crate::error::{WorkbookError, WorkbookResult};

/// A single cell value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CellValue {
    /// Blank cell.
    #[default]
    Empty,
    /// Numeric cell.
    Number(Decimal),
    /// Text cell.
    Text(String),
    /// Boolean cell.
    Bool(bool),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// Returns true for blank cells and cells holding only whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }

    /// Returns the number held by a numeric cell.
    #[must_use]
    pub const fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(n) => write!(f, "{}", n.normalize()),
            Self::Text(s) => f.write_str(s),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
        }
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&AccountCode> for CellValue {
    fn from(code: &AccountCode) -> Self {
        match code {
            AccountCode::Numeric(n) => Self::Number(Decimal::from(*n)),
            AccountCode::Text(s) => Self::Text(s.clone()),
        }
    }
}

/// A named sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
}

impl Sheet {
    /// Creates an empty sheet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Sheet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cell at `(row, column)`; blank if never written.
    #[must_use]
    pub fn cell(&self, row: u32, column: u32) -> &CellValue {
        self.cells.get(&(row, column)).unwrap_or(&EMPTY_CELL)
    }

    /// Writes a cell. Writing `Empty` clears it.
    pub fn set(&mut self, row: u32, column: u32, value: impl Into<CellValue>) {
        let value = value.into();
        if value == CellValue::Empty {
            self.cells.remove(&(row, column));
        } else {
            self.cells.insert((row, column), value);
        }
    }

    /// Clears a cell.
    pub fn clear(&mut self, row: u32, column: u32) {
        self.cells.remove(&(row, column));
    }

    /// Clears `columns` on every row from `first_row` down to the last used row.
    pub fn clear_columns_from(&mut self, first_row: u32, columns: &[u32]) {
        self.cells
            .retain(|(row, column), _| *row < first_row || !columns.contains(column));
    }

    /// Last row holding a non-blank cell, 0 for an empty sheet.
    #[must_use]
    pub fn last_row(&self) -> u32 {
        self.cells
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|((row, _), _)| *row)
            .max()
            .unwrap_or(0)
    }

    /// Last column holding a non-blank cell, 0 for an empty sheet.
    #[must_use]
    pub fn last_column(&self) -> u32 {
        self.cells
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|((_, column), _)| *column)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over written cells as `((row, column), value)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((u32, u32), &CellValue)> {
        self.cells.iter().map(|(pos, value)| (*pos, value))
    }
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates an empty workbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sheet named `name`.
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Returns the sheet named `name` mutably.
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    /// Returns the sheet named `name` or a `MissingSheet` error.
    pub fn require(&self, name: &str) -> WorkbookResult<&Sheet> {
        self.sheet(name)
            .ok_or_else(|| WorkbookError::missing_sheet(name))
    }

    /// Mutable variant of [`Workbook::require`].
    pub fn require_mut(&mut self, name: &str) -> WorkbookResult<&mut Sheet> {
        self.sheet_mut(name)
            .ok_or_else(|| WorkbookError::missing_sheet(name))
    }

    /// Returns true if a sheet named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sheet(name).is_some()
    }

    /// Returns the sheet named `name`, appending an empty one if needed.
    pub fn sheet_or_insert(&mut self, name: &str) -> &mut Sheet {
        let index = match self.sheets.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sheets.push(Sheet::new(name));
                self.sheets.len() - 1
            }
        };
        &mut self.sheets[index]
    }

    /// Iterates over sheets in workbook order.
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Sheet names in workbook order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unwritten_cell_is_empty() {
        let sheet = Sheet::new("Input");
        assert_eq!(sheet.cell(1, 1), &CellValue::Empty);
        assert_eq!(sheet.last_row(), 0);
    }

    #[test]
    fn test_set_and_clear() {
        let mut sheet = Sheet::new("Input");
        sheet.set(2, 3, dec!(10));
        sheet.set(5, 1, "Cash");

        assert_eq!(sheet.cell(2, 3).as_number(), Some(dec!(10)));
        assert_eq!(sheet.last_row(), 5);
        assert_eq!(sheet.last_column(), 3);

        sheet.set(5, 1, CellValue::Empty);
        assert_eq!(sheet.last_row(), 2);
    }

    #[test]
    fn test_clear_columns_from_keeps_header_and_other_columns() {
        let mut sheet = Sheet::new("Trial_Balance");
        sheet.set(1, 1, "Account Code");
        sheet.set(2, 1, dec!(1000));
        sheet.set(9, 2, "Stale");
        sheet.set(3, 6, "Notes");

        sheet.clear_columns_from(2, &[1, 2, 3, 4]);

        assert_eq!(sheet.cell(1, 1), &CellValue::from("Account Code"));
        assert!(sheet.cell(2, 1).is_empty());
        assert!(sheet.cell(9, 2).is_empty());
        assert_eq!(sheet.cell(3, 6), &CellValue::from("Notes"));
    }

    #[test]
    fn test_require_missing_sheet() {
        let workbook = Workbook::new();
        let err = workbook.require("Chart_of_Accounts").unwrap_err();
        assert!(matches!(err, WorkbookError::MissingSheet(name) if name == "Chart_of_Accounts"));
    }

    #[test]
    fn test_sheet_or_insert_keeps_order() {
        let mut workbook = Workbook::new();
        workbook.sheet_or_insert("Input").set(1, 1, "Value1");
        workbook.sheet_or_insert("Output");
        workbook.sheet_or_insert("Input").set(1, 2, dec!(10));

        assert_eq!(workbook.sheet_names(), vec!["Input", "Output"]);
        assert_eq!(
            workbook.sheet("Input").unwrap().cell(1, 2),
            &CellValue::Number(dec!(10))
        );
    }

    #[test]
    fn test_account_code_cell() {
        assert_eq!(
            CellValue::from(&AccountCode::Numeric(4000)),
            CellValue::Number(dec!(4000))
        );
        assert_eq!(
            CellValue::from(&AccountCode::Text("A1".into())),
            CellValue::Text("A1".into())
        );
    }
}
