//! Sheet layouts.
//!
//! Each report lives at a fixed place inside the workbook. A layout names the
//! sheet, the first data row, and every column the reader or writer touches.
//! The defaults reproduce the positions of the Manufacturing Accounting
//! workbook template.

use serde::{Deserialize, Serialize};

/// Reference to a sheet column.
///
/// Deserializes from an integer (1-based position) or from a string (header
/// text, matched case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// 1-based column position.
    Index(u32),
    /// Header text found in the layout's header row.
    Header(String),
}

impl ColumnRef {
    /// Creates a header reference.
    #[must_use]
    pub fn header(name: impl Into<String>) -> Self {
        Self::Header(name.into())
    }
}

impl From<u32> for ColumnRef {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

const fn default_header_row() -> u32 {
    1
}

const fn default_first_data_row() -> u32 {
    2
}

/// Layout of the Chart of Accounts sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    /// Sheet name.
    pub sheet: String,
    /// Row holding column headers.
    pub header_row: u32,
    /// First row holding an account.
    pub first_data_row: u32,
    /// Account code column.
    pub code: ColumnRef,
    /// Account name column.
    pub name: ColumnRef,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            sheet: "Chart_of_Accounts".to_string(),
            header_row: default_header_row(),
            first_data_row: default_first_data_row(),
            code: ColumnRef::Index(1),
            name: ColumnRef::Index(2),
        }
    }
}

/// Layout of the General Ledger sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerLayout {
    /// Sheet name.
    pub sheet: String,
    /// Row holding column headers.
    pub header_row: u32,
    /// First row holding a transaction.
    pub first_data_row: u32,
    /// Account code column.
    pub code: ColumnRef,
    /// Debit amount column.
    pub debit: ColumnRef,
    /// Credit amount column.
    pub credit: ColumnRef,
}

impl Default for LedgerLayout {
    fn default() -> Self {
        Self {
            sheet: "General_Ledger".to_string(),
            header_row: default_header_row(),
            first_data_row: default_first_data_row(),
            code: ColumnRef::Index(3),
            debit: ColumnRef::Index(4),
            credit: ColumnRef::Index(5),
        }
    }
}

/// Layout of the Trial Balance sheet, used both to write and to read it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialBalanceLayout {
    /// Sheet name.
    pub sheet: String,
    /// Row holding column headers.
    pub header_row: u32,
    /// First row holding an account.
    pub first_data_row: u32,
    /// Account code column.
    pub code: ColumnRef,
    /// Account name column.
    pub name: ColumnRef,
    /// Debit total column.
    pub debit: ColumnRef,
    /// Credit total column.
    pub credit: ColumnRef,
}

impl Default for TrialBalanceLayout {
    fn default() -> Self {
        Self {
            sheet: "Trial_Balance".to_string(),
            header_row: default_header_row(),
            first_data_row: default_first_data_row(),
            code: ColumnRef::Index(1),
            name: ColumnRef::Index(2),
            debit: ColumnRef::Index(3),
            credit: ColumnRef::Index(4),
        }
    }
}

/// Layout of the Income Statement sheet.
///
/// The five line items occupy consecutive rows starting at `first_row`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatementLayout {
    /// Sheet name.
    pub sheet: String,
    /// Row holding column headers.
    pub header_row: u32,
    /// Row of the first line item.
    pub first_row: u32,
    /// Column receiving the amounts.
    pub value: ColumnRef,
}

impl Default for IncomeStatementLayout {
    fn default() -> Self {
        Self {
            sheet: "Income_Statement".to_string(),
            header_row: default_header_row(),
            first_row: default_first_data_row(),
            value: ColumnRef::Index(2),
        }
    }
}

/// Layout of the Balance Sheet sheet.
///
/// Assets and liabilities/equity share row alignment: the n-th template line
/// of each side lands on `first_row + n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetLayout {
    /// Sheet name.
    pub sheet: String,
    /// Row holding column headers.
    pub header_row: u32,
    /// Row of the first line on each side.
    pub first_row: u32,
    /// Column receiving asset amounts.
    pub assets: ColumnRef,
    /// Column receiving liability and equity amounts.
    pub liabilities_and_equity: ColumnRef,
}

impl Default for BalanceSheetLayout {
    fn default() -> Self {
        Self {
            sheet: "Balance_Sheet".to_string(),
            header_row: default_header_row(),
            first_row: default_first_data_row(),
            assets: ColumnRef::Index(2),
            liabilities_and_equity: ColumnRef::Index(4),
        }
    }
}

/// Every sheet layout the processor needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayouts {
    /// Chart of Accounts source.
    pub chart: ChartLayout,
    /// General Ledger source.
    pub ledger: LedgerLayout,
    /// Trial Balance output and report source.
    pub trial_balance: TrialBalanceLayout,
    /// Income Statement output.
    pub income_statement: IncomeStatementLayout,
    /// Balance Sheet output.
    pub balance_sheet: BalanceSheetLayout,
}
