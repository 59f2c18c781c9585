//! Layout resolution and row access.
//!
//! Layouts reference columns by position or by header text. Each layout is
//! resolved once per operation against the actual sheet; readers and writers
//! then work with plain column numbers through [`RowView`].

use std::str::FromStr;

use ledgerbook_shared::{
    AccountCode, BalanceSheetLayout, ChartLayout, ColumnRef, IncomeStatementLayout, LedgerLayout,
    TrialBalanceLayout,
};
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{WorkbookError, WorkbookResult};
use crate::model::{CellValue, Sheet};

/// Resolves a column reference to a 1-based column number.
pub fn resolve_column(sheet: &Sheet, header_row: u32, column: &ColumnRef) -> WorkbookResult<u32> {
    match column {
        ColumnRef::Index(0) => Err(WorkbookError::invalid_layout(
            sheet.name(),
            "column positions start at 1",
        )),
        ColumnRef::Index(index) => Ok(*index),
        ColumnRef::Header(header) => {
            let wanted = header.trim().to_lowercase();
            (1..=sheet.last_column())
                .find(|col| sheet.cell(header_row, *col).to_string().trim().to_lowercase() == wanted)
                .ok_or_else(|| WorkbookError::UnknownColumn {
                    sheet: sheet.name().to_string(),
                    header: header.clone(),
                })
        }
    }
}

fn check_row(sheet: &Sheet, row: u32) -> WorkbookResult<u32> {
    if row == 0 {
        return Err(WorkbookError::invalid_layout(
            sheet.name(),
            "row numbers start at 1",
        ));
    }
    Ok(row)
}

/// Resolved Chart of Accounts columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColumns {
    /// First data row.
    pub first_row: u32,
    /// Account code column.
    pub code: u32,
    /// Account name column.
    pub name: u32,
}

impl ChartColumns {
    /// Resolves `layout` against `sheet`.
    pub fn resolve(layout: &ChartLayout, sheet: &Sheet) -> WorkbookResult<Self> {
        Ok(Self {
            first_row: check_row(sheet, layout.first_data_row)?,
            code: resolve_column(sheet, layout.header_row, &layout.code)?,
            name: resolve_column(sheet, layout.header_row, &layout.name)?,
        })
    }
}

/// Resolved General Ledger columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerColumns {
    /// First data row.
    pub first_row: u32,
    /// Account code column.
    pub code: u32,
    /// Debit column.
    pub debit: u32,
    /// Credit column.
    pub credit: u32,
}

impl LedgerColumns {
    /// Resolves `layout` against `sheet`.
    pub fn resolve(layout: &LedgerLayout, sheet: &Sheet) -> WorkbookResult<Self> {
        Ok(Self {
            first_row: check_row(sheet, layout.first_data_row)?,
            code: resolve_column(sheet, layout.header_row, &layout.code)?,
            debit: resolve_column(sheet, layout.header_row, &layout.debit)?,
            credit: resolve_column(sheet, layout.header_row, &layout.credit)?,
        })
    }
}

/// Resolved Trial Balance columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialBalanceColumns {
    /// First data row.
    pub first_row: u32,
    /// Account code column.
    pub code: u32,
    /// Account name column.
    pub name: u32,
    /// Debit total column.
    pub debit: u32,
    /// Credit total column.
    pub credit: u32,
}

impl TrialBalanceColumns {
    /// Resolves `layout` against `sheet`.
    pub fn resolve(layout: &TrialBalanceLayout, sheet: &Sheet) -> WorkbookResult<Self> {
        Ok(Self {
            first_row: check_row(sheet, layout.first_data_row)?,
            code: resolve_column(sheet, layout.header_row, &layout.code)?,
            name: resolve_column(sheet, layout.header_row, &layout.name)?,
            debit: resolve_column(sheet, layout.header_row, &layout.debit)?,
            credit: resolve_column(sheet, layout.header_row, &layout.credit)?,
        })
    }

    /// All four columns, in layout order.
    #[must_use]
    pub const fn all(&self) -> [u32; 4] {
        [self.code, self.name, self.debit, self.credit]
    }
}

/// Trial Balance columns needed to read balances back.
///
/// The name column is not resolved, so a layout whose name header is absent
/// can still feed the income statement and balance sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialBalanceAmountColumns {
    /// First data row.
    pub first_row: u32,
    /// Account code column.
    pub code: u32,
    /// Debit total column.
    pub debit: u32,
    /// Credit total column.
    pub credit: u32,
}

impl TrialBalanceAmountColumns {
    /// Resolves the code and amount columns of `layout` against `sheet`.
    pub fn resolve(layout: &TrialBalanceLayout, sheet: &Sheet) -> WorkbookResult<Self> {
        Ok(Self {
            first_row: check_row(sheet, layout.first_data_row)?,
            code: resolve_column(sheet, layout.header_row, &layout.code)?,
            debit: resolve_column(sheet, layout.header_row, &layout.debit)?,
            credit: resolve_column(sheet, layout.header_row, &layout.credit)?,
        })
    }
}

/// Resolved Income Statement position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeStatementColumns {
    /// Row of the first line item.
    pub first_row: u32,
    /// Value column.
    pub value: u32,
}

impl IncomeStatementColumns {
    /// Resolves `layout` against `sheet`.
    pub fn resolve(layout: &IncomeStatementLayout, sheet: &Sheet) -> WorkbookResult<Self> {
        Ok(Self {
            first_row: check_row(sheet, layout.first_row)?,
            value: resolve_column(sheet, layout.header_row, &layout.value)?,
        })
    }
}

/// Resolved Balance Sheet positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSheetColumns {
    /// Row of the first line on each side.
    pub first_row: u32,
    /// Asset column.
    pub assets: u32,
    /// Liability and equity column.
    pub liabilities_and_equity: u32,
}

impl BalanceSheetColumns {
    /// Resolves `layout` against `sheet`.
    pub fn resolve(layout: &BalanceSheetLayout, sheet: &Sheet) -> WorkbookResult<Self> {
        Ok(Self {
            first_row: check_row(sheet, layout.first_row)?,
            assets: resolve_column(sheet, layout.header_row, &layout.assets)?,
            liabilities_and_equity: resolve_column(
                sheet,
                layout.header_row,
                &layout.liabilities_and_equity,
            )?,
        })
    }
}

/// Iterator over the rows of a sheet, from a first row down to its last used row.
pub struct SheetRows<'a> {
    sheet: &'a Sheet,
    next: u32,
    last: u32,
}

impl<'a> SheetRows<'a> {
    /// Rows of `sheet` starting at `first_row`.
    #[must_use]
    pub fn from_row(sheet: &'a Sheet, first_row: u32) -> Self {
        Self {
            sheet,
            next: first_row,
            last: sheet.last_row(),
        }
    }
}

impl<'a> Iterator for SheetRows<'a> {
    type Item = RowView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let row = RowView {
            sheet: self.sheet,
            row: self.next,
        };
        self.next += 1;
        Some(row)
    }
}

/// Read access to one sheet row with cell coercion.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    sheet: &'a Sheet,
    row: u32,
}

impl<'a> RowView<'a> {
    /// Row number.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Raw cell.
    #[must_use]
    pub fn cell(&self, column: u32) -> &'a CellValue {
        self.sheet.cell(self.row, column)
    }

    /// Account code; `None` for blank cells.
    #[must_use]
    pub fn code(&self, column: u32) -> Option<AccountCode> {
        match self.cell(column) {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(AccountCode::from_decimal(*n)),
            CellValue::Text(s) => AccountCode::parse(s),
            CellValue::Bool(b) => Some(AccountCode::Text(b.to_string())),
        }
    }

    /// Amount; blank cells read as zero, as does unparseable text.
    #[must_use]
    pub fn amount(&self, column: u32) -> Decimal {
        match self.cell(column) {
            CellValue::Number(n) => *n,
            CellValue::Text(s) if s.trim().is_empty() => Decimal::ZERO,
            CellValue::Text(s) => parse_decimal(s).unwrap_or_else(|| {
                warn!(
                    sheet = self.sheet.name(),
                    row = self.row,
                    column,
                    value = %s,
                    "Non-numeric amount read as zero"
                );
                Decimal::ZERO
            }),
            CellValue::Empty => Decimal::ZERO,
            CellValue::Bool(_) => {
                warn!(
                    sheet = self.sheet.name(),
                    row = self.row,
                    column,
                    "Boolean amount read as zero"
                );
                Decimal::ZERO
            }
        }
    }

    /// Cell rendered as text; blank cells give an empty string.
    #[must_use]
    pub fn text(&self, column: u32) -> String {
        self.cell(column).to_string()
    }
}

/// Parses plain or scientific decimal text.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn ledger_sheet() -> Sheet {
        let mut sheet = Sheet::new("General_Ledger");
        sheet.set(1, 1, "Date");
        sheet.set(1, 2, "Description");
        sheet.set(1, 3, "Account Code");
        sheet.set(1, 4, " debit ");
        sheet.set(1, 5, "Credit");
        sheet
    }

    #[test]
    fn test_resolve_by_index() {
        let sheet = ledger_sheet();
        assert_eq!(resolve_column(&sheet, 1, &ColumnRef::Index(3)).unwrap(), 3);
    }

    #[test]
    fn test_resolve_by_header_is_case_insensitive() {
        let sheet = ledger_sheet();
        assert_eq!(
            resolve_column(&sheet, 1, &ColumnRef::header("Debit")).unwrap(),
            4
        );
        assert_eq!(
            resolve_column(&sheet, 1, &ColumnRef::header("account code")).unwrap(),
            3
        );
    }

    #[test]
    fn test_resolve_unknown_header() {
        let sheet = ledger_sheet();
        let err = resolve_column(&sheet, 1, &ColumnRef::header("Memo")).unwrap_err();
        assert!(matches!(err, WorkbookError::UnknownColumn { header, .. } if header == "Memo"));
    }

    #[test]
    fn test_resolve_column_zero_is_invalid() {
        let sheet = ledger_sheet();
        assert!(matches!(
            resolve_column(&sheet, 1, &ColumnRef::Index(0)),
            Err(WorkbookError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_ledger_columns_default_layout() {
        let columns = LedgerColumns::resolve(&LedgerLayout::default(), &ledger_sheet()).unwrap();
        assert_eq!(
            columns,
            LedgerColumns {
                first_row: 2,
                code: 3,
                debit: 4,
                credit: 5
            }
        );
    }

    #[test]
    fn test_rows_stop_at_last_used_row() {
        let mut sheet = ledger_sheet();
        sheet.set(2, 3, dec!(1000));
        sheet.set(4, 3, dec!(2000));

        let rows: Vec<u32> = SheetRows::from_row(&sheet, 2).map(|r| r.row()).collect();

        assert_eq!(rows, vec![2, 3, 4]);
    }

    #[rstest]
    #[case(CellValue::Empty, dec!(0))]
    #[case(CellValue::Number(dec!(12.5)), dec!(12.5))]
    #[case(CellValue::Text("  ".into()), dec!(0))]
    #[case(CellValue::Text("250".into()), dec!(250))]
    #[case(CellValue::Text("1.5E2".into()), dec!(150))]
    #[case(CellValue::Text("n/a".into()), dec!(0))]
    #[case(CellValue::Bool(true), dec!(0))]
    fn test_amount_coercion(#[case] cell: CellValue, #[case] expected: Decimal) {
        let mut sheet = Sheet::new("General_Ledger");
        sheet.set(2, 4, cell);
        let row = SheetRows::from_row(&sheet, 2).next();
        // A sheet holding only blanks yields no rows.
        let amount = row.map_or(Decimal::ZERO, |r| r.amount(4));
        assert_eq!(amount, expected);
    }

    #[rstest]
    #[case(CellValue::Empty, None)]
    #[case(CellValue::Number(dec!(1000)), Some(AccountCode::Numeric(1000)))]
    #[case(CellValue::Text("1000".into()), Some(AccountCode::Numeric(1000)))]
    #[case(CellValue::Text("  ".into()), None)]
    #[case(CellValue::Text("AR-1".into()), Some(AccountCode::Text("AR-1".into())))]
    fn test_code_coercion(#[case] cell: CellValue, #[case] expected: Option<AccountCode>) {
        let mut sheet = Sheet::new("Chart_of_Accounts");
        sheet.set(2, 1, cell);
        sheet.set(2, 2, "Name");
        let row = SheetRows::from_row(&sheet, 2).next().unwrap();
        assert_eq!(row.code(1), expected);
    }
}
