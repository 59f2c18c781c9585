//! Shared workbook fixture.

#![allow(dead_code)]

use ledgerbook_workbook::{Sheet, Workbook};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const CHART: [(i64, &str); 9] = [
    (1000, "Cash at Bank"),
    (1100, "Accounts Receivable"),
    (1200, "Inventory"),
    (2000, "Accounts Payable"),
    (3000, "Equity Share Capital"),
    (3100, "Retained Earnings"),
    (4000, "Sales Revenue"),
    (5000, "Cost of Goods Sold"),
    (5100, "Salaries Expense"),
];

/// `(code, debit, credit)` rows. Code 9999 is not in the chart.
pub fn ledger_rows() -> Vec<(i64, Decimal, Decimal)> {
    vec![
        (1000, dec!(10000), dec!(0)),
        (3000, dec!(0), dec!(10000)),
        (1200, dec!(4000), dec!(0)),
        (2000, dec!(0), dec!(4000)),
        (1100, dec!(6000), dec!(0)),
        (4000, dec!(0), dec!(6000)),
        (5000, dec!(2500), dec!(0)),
        (1200, dec!(0), dec!(2500)),
        (5100, dec!(1500), dec!(0)),
        (1000, dec!(0), dec!(1500)),
        (9999, dec!(50), dec!(0)),
    ]
}

fn header(sheet: &mut Sheet, labels: &[&str]) {
    for (column, label) in (1..).zip(labels) {
        sheet.set(1, column, *label);
    }
}

/// Workbook with the five sheets laid out at their default positions.
pub fn sample_workbook() -> Workbook {
    let mut workbook = Workbook::new();

    let chart = workbook.sheet_or_insert("Chart_of_Accounts");
    header(chart, &["Account Code", "Account Name"]);
    for (row, (code, name)) in (2..).zip(CHART) {
        chart.set(row, 1, Decimal::from(code));
        chart.set(row, 2, name);
    }

    let ledger = workbook.sheet_or_insert("General_Ledger");
    header(
        ledger,
        &["Date", "Description", "Account Code", "Debit", "Credit"],
    );
    for (row, (code, debit, credit)) in (2..).zip(ledger_rows()) {
        ledger.set(row, 1, "2024-01-31");
        ledger.set(row, 2, "Entry");
        ledger.set(row, 3, Decimal::from(code));
        if !debit.is_zero() {
            ledger.set(row, 4, debit);
        }
        if !credit.is_zero() {
            ledger.set(row, 5, credit);
        }
    }

    let trial_balance = workbook.sheet_or_insert("Trial_Balance");
    header(
        trial_balance,
        &["Account Code", "Account Name", "Debit", "Credit"],
    );

    let income = workbook.sheet_or_insert("Income_Statement");
    header(income, &["Line", "Amount"]);
    for (row, label) in (2..).zip([
        "Sales Revenue",
        "Cost of Goods Sold",
        "Gross Profit",
        "Salaries Expense",
        "Net Profit",
    ]) {
        income.set(row, 1, label);
    }

    let balance = workbook.sheet_or_insert("Balance_Sheet");
    header(
        balance,
        &["Assets", "Amount", "Liabilities and Equity", "Amount"],
    );

    workbook
}
