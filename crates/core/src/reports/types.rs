//! Report data types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountCode;
use crate::ledger::AccountTotals;

/// One account line of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account code.
    pub code: AccountCode,
    /// Account name.
    pub name: String,
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
}

impl TrialBalanceRow {
    /// Returns the row's debit and credit totals.
    #[must_use]
    pub const fn totals(&self) -> AccountTotals {
        AccountTotals::new(self.debit_total, self.credit_total)
    }
}

/// Trial balance column totals.
///
/// Informational only: no verdict on whether debits equal credits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of the debit column.
    pub total_debit: Decimal,
    /// Sum of the credit column.
    pub total_credit: Decimal,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// One row per chart account, ascending code.
    pub rows: Vec<TrialBalanceRow>,
    /// Ledger codes missing from the chart, ascending. They are not in `rows`.
    pub unmatched_codes: Vec<AccountCode>,
    /// Column totals.
    pub totals: TrialBalanceTotals,
}

/// Trial balance keyed by account code, as consumed by the report derivers.
///
/// Codes that are not present read as `(0, 0)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialBalanceLookup {
    balances: HashMap<AccountCode, AccountTotals>,
}

impl TrialBalanceLookup {
    /// Builds the lookup from `(code, totals)` pairs. A repeated code keeps
    /// the last pair.
    #[must_use]
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (AccountCode, AccountTotals)>,
    {
        Self {
            balances: rows.into_iter().collect(),
        }
    }

    /// Returns the totals of `code`, zero if absent.
    #[must_use]
    pub fn get(&self, code: &AccountCode) -> AccountTotals {
        self.balances.get(code).copied().unwrap_or_default()
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if the lookup holds no account.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl From<&TrialBalanceReport> for TrialBalanceLookup {
    fn from(report: &TrialBalanceReport) -> Self {
        Self::from_rows(report.rows.iter().map(|row| (row.code.clone(), row.totals())))
    }
}

/// A derived scalar written at a fixed report position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Display label.
    pub label: String,
    /// Source account, when the line transcribes a single account.
    pub code: Option<AccountCode>,
    /// Amount.
    pub amount: Decimal,
}

impl ReportLine {
    /// Creates a line computed from a formula.
    #[must_use]
    pub fn computed(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            code: None,
            amount,
        }
    }

    /// Creates a line transcribing one account.
    #[must_use]
    pub fn for_account(label: impl Into<String>, code: AccountCode, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            code: Some(code),
            amount,
        }
    }
}

/// Income statement line labels, in sheet order.
pub const INCOME_STATEMENT_LABELS: [&str; 5] = [
    "Sales Revenue",
    "Cost of Goods Sold",
    "Gross Profit",
    "Salaries Expense",
    "Net Profit",
];

/// Income statement report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Revenue account, credit minus debit.
    pub sales_revenue: Decimal,
    /// COGS account, debit minus credit.
    pub cost_of_goods_sold: Decimal,
    /// Sales revenue minus COGS.
    pub gross_profit: Decimal,
    /// Salaries account, debit minus credit.
    pub salaries_expense: Decimal,
    /// Gross profit minus salaries.
    pub net_profit: Decimal,
}

impl IncomeStatementReport {
    /// Returns the five lines in sheet order.
    #[must_use]
    pub fn lines(&self) -> Vec<ReportLine> {
        let amounts = [
            self.sales_revenue,
            self.cost_of_goods_sold,
            self.gross_profit,
            self.salaries_expense,
            self.net_profit,
        ];
        INCOME_STATEMENT_LABELS
            .iter()
            .zip(amounts)
            .map(|(label, amount)| ReportLine::computed(*label, amount))
            .collect()
    }
}

/// Balance sheet report: net amounts (credit minus debit) in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Asset lines.
    pub assets: Vec<ReportLine>,
    /// Liability and equity lines.
    pub liabilities_and_equity: Vec<ReportLine>,
}
