//! Sheet readers producing core inputs.

use ledgerbook_core::accounts::ChartOfAccounts;
use ledgerbook_core::ledger::{AccountTotals, LedgerEntry, LedgerSummary};
use ledgerbook_core::reports::TrialBalanceLookup;
use ledgerbook_core::tabulate::{LabeledValues, TabulateError};
use ledgerbook_shared::{ChartLayout, LedgerLayout, TrialBalanceLayout};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::WorkbookResult;
use crate::model::{CellValue, Workbook};
use crate::schema::{
    parse_decimal, ChartColumns, LedgerColumns, SheetRows, TrialBalanceAmountColumns,
};

/// Reads the Chart of Accounts. Rows with a blank code are skipped; a
/// repeated code keeps the last name.
pub fn read_chart(workbook: &Workbook, layout: &ChartLayout) -> WorkbookResult<ChartOfAccounts> {
    let sheet = workbook.require(&layout.sheet)?;
    let columns = ChartColumns::resolve(layout, sheet)?;

    let chart = ChartOfAccounts::from_rows(
        SheetRows::from_row(sheet, columns.first_row)
            .map(|row| (row.code(columns.code), row.text(columns.name))),
    );

    debug!(sheet = %layout.sheet, accounts = chart.len(), "Read chart of accounts");
    Ok(chart)
}

/// Reads the General Ledger rows.
pub fn read_ledger_entries(
    workbook: &Workbook,
    layout: &LedgerLayout,
) -> WorkbookResult<Vec<LedgerEntry>> {
    let sheet = workbook.require(&layout.sheet)?;
    let columns = LedgerColumns::resolve(layout, sheet)?;

    Ok(SheetRows::from_row(sheet, columns.first_row)
        .map(|row| LedgerEntry {
            account_code: row.code(columns.code),
            debit: row.amount(columns.debit),
            credit: row.amount(columns.credit),
        })
        .collect())
}

/// Reads the General Ledger and aggregates it per account.
///
/// An account total outside the decimal range fails with `Ledger`.
pub fn read_ledger(workbook: &Workbook, layout: &LedgerLayout) -> WorkbookResult<LedgerSummary> {
    let entries = read_ledger_entries(workbook, layout)?;
    let summary = LedgerSummary::aggregate(&entries)?;

    debug!(
        sheet = %layout.sheet,
        entries = entries.len(),
        accounts = summary.len(),
        "Aggregated general ledger"
    );
    Ok(summary)
}

/// Reads the current Trial Balance sheet as a lookup.
///
/// Only the code and amount columns are resolved. Rows with a blank code are
/// skipped; a repeated code keeps the last row.
pub fn read_trial_balance(
    workbook: &Workbook,
    layout: &TrialBalanceLayout,
) -> WorkbookResult<TrialBalanceLookup> {
    let sheet = workbook.require(&layout.sheet)?;
    let columns = TrialBalanceAmountColumns::resolve(layout, sheet)?;

    let lookup = TrialBalanceLookup::from_rows(
        SheetRows::from_row(sheet, columns.first_row).filter_map(|row| {
            row.code(columns.code).map(|code| {
                (
                    code,
                    AccountTotals::new(row.amount(columns.debit), row.amount(columns.credit)),
                )
            })
        }),
    );

    debug!(sheet = %layout.sheet, accounts = lookup.len(), "Read trial balance");
    Ok(lookup)
}

/// Reads a sheet as `label -> values`, starting at row 1.
///
/// Column 1 holds the label and every following non-blank cell one value.
/// Rows with a blank label are skipped. Text that is not a number fails the
/// read.
pub fn read_labeled_values(workbook: &Workbook, sheet_name: &str) -> WorkbookResult<LabeledValues> {
    let sheet = workbook.require(sheet_name)?;
    let last_column = sheet.last_column();
    let mut data = LabeledValues::new();

    for row in SheetRows::from_row(sheet, 1) {
        let label = row.text(1).trim().to_string();
        if label.is_empty() {
            continue;
        }

        let mut values = Vec::new();
        for column in 2..=last_column {
            match row.cell(column) {
                CellValue::Number(n) => values.push(*n),
                cell if cell.is_empty() => {}
                cell => {
                    let text = cell.to_string();
                    let value: Decimal =
                        parse_decimal(&text).ok_or_else(|| TabulateError::NonNumeric {
                            label: label.clone(),
                            value: text.clone(),
                        })?;
                    values.push(value);
                }
            }
        }
        data.insert(label, values);
    }

    debug!(sheet = sheet_name, rows = data.len(), "Read labelled rows");
    Ok(data)
}
