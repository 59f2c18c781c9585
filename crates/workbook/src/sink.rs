//! Sheet writers for derived reports.
//!
//! Writers only touch the cells they own. Headers, labels and any other
//! content on the target sheet are left alone.

use ledgerbook_core::reports::{BalanceSheetReport, IncomeStatementReport, TrialBalanceReport};
use ledgerbook_core::tabulate::Tabulated;

use crate::model::{CellValue, Sheet};
use crate::schema::{BalanceSheetColumns, IncomeStatementColumns, TrialBalanceColumns};

/// Writes the trial balance rows from the first data row down.
///
/// The four report columns are cleared below the header first, so rows left
/// over from a longer earlier run do not survive.
pub fn write_trial_balance(
    sheet: &mut Sheet,
    columns: &TrialBalanceColumns,
    report: &TrialBalanceReport,
) {
    sheet.clear_columns_from(columns.first_row, &columns.all());

    for (row, line) in (columns.first_row..).zip(&report.rows) {
        sheet.set(row, columns.code, &line.code);
        sheet.set(row, columns.name, line.name.as_str());
        sheet.set(row, columns.debit, line.debit_total);
        sheet.set(row, columns.credit, line.credit_total);
    }
}

/// Writes the five income statement values down the value column.
pub fn write_income_statement(
    sheet: &mut Sheet,
    columns: &IncomeStatementColumns,
    report: &IncomeStatementReport,
) {
    for (row, line) in (columns.first_row..).zip(report.lines()) {
        sheet.set(row, columns.value, line.amount);
    }
}

/// Writes both sides of the balance sheet in template order.
pub fn write_balance_sheet(
    sheet: &mut Sheet,
    columns: &BalanceSheetColumns,
    report: &BalanceSheetReport,
) {
    for (row, line) in (columns.first_row..).zip(&report.assets) {
        sheet.set(row, columns.assets, line.amount);
    }
    for (row, line) in (columns.first_row..).zip(&report.liabilities_and_equity) {
        sheet.set(row, columns.liabilities_and_equity, line.amount);
    }
}

/// Writes calculation results from row 1: label in column 1, value in
/// column 2.
pub fn write_tabulated(sheet: &mut Sheet, results: &[Tabulated]) {
    for (row, result) in (1..).zip(results) {
        sheet.set(row, 1, CellValue::Text(result.label.clone()));
        sheet.set(row, 2, result.value);
    }
}
