//! Report generation service.

use ledgerbook_shared::{BalanceSheetTemplate, IncomeStatementTemplate, TemplateLine};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    BalanceSheetReport, IncomeStatementReport, ReportLine, TrialBalanceLookup,
    TrialBalanceReport, TrialBalanceRow, TrialBalanceTotals,
};
use crate::accounts::ChartOfAccounts;
use crate::ledger::LedgerSummary;

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates the trial balance by left-joining the chart to the ledger.
    ///
    /// Every chart account yields exactly one row, in ascending code order,
    /// with `(0, 0)` when the ledger never mentions it. Ledger codes missing
    /// from the chart are left out of the rows and listed in
    /// `unmatched_codes`.
    ///
    /// # Errors
    ///
    /// `Overflow` if a column total leaves the decimal range.
    pub fn generate_trial_balance(
        chart: &ChartOfAccounts,
        ledger: &LedgerSummary,
    ) -> Result<TrialBalanceReport, ReportError> {
        let rows: Vec<TrialBalanceRow> = chart
            .iter()
            .map(|(code, name)| {
                let totals = ledger.get(code);
                TrialBalanceRow {
                    code: code.clone(),
                    name: name.to_string(),
                    debit_total: totals.debit_total,
                    credit_total: totals.credit_total,
                }
            })
            .collect();

        let mut unmatched_codes: Vec<_> = ledger
            .codes()
            .filter(|code| !chart.contains(code))
            .cloned()
            .collect();
        unmatched_codes.sort();

        let totals = TrialBalanceTotals {
            total_debit: checked_total(rows.iter().map(|r| r.debit_total))
                .ok_or_else(|| ReportError::overflow("total debit"))?,
            total_credit: checked_total(rows.iter().map(|r| r.credit_total))
                .ok_or_else(|| ReportError::overflow("total credit"))?,
        };

        Ok(TrialBalanceReport {
            rows,
            unmatched_codes,
            totals,
        })
    }

    /// Generates the income statement from the trial balance.
    ///
    /// Missing accounts count as zero.
    ///
    /// # Errors
    ///
    /// `Overflow` if any line leaves the decimal range.
    pub fn generate_income_statement(
        trial_balance: &TrialBalanceLookup,
        template: &IncomeStatementTemplate,
    ) -> Result<IncomeStatementReport, ReportError> {
        let sales_revenue = trial_balance
            .get(&template.sales_revenue)
            .net_credit()
            .ok_or_else(|| ReportError::overflow("sales revenue"))?;
        let cost_of_goods_sold = trial_balance
            .get(&template.cost_of_goods_sold)
            .net_debit()
            .ok_or_else(|| ReportError::overflow("cost of goods sold"))?;
        let gross_profit = sales_revenue
            .checked_sub(cost_of_goods_sold)
            .ok_or_else(|| ReportError::overflow("gross profit"))?;
        let salaries_expense = trial_balance
            .get(&template.salaries_expense)
            .net_debit()
            .ok_or_else(|| ReportError::overflow("salaries expense"))?;
        let net_profit = gross_profit
            .checked_sub(salaries_expense)
            .ok_or_else(|| ReportError::overflow("net profit"))?;

        Ok(IncomeStatementReport {
            sales_revenue,
            cost_of_goods_sold,
            gross_profit,
            salaries_expense,
            net_profit,
        })
    }

    /// Generates the balance sheet from the trial balance.
    ///
    /// Every template line carries credit minus debit of its account. No
    /// balancing check is made.
    ///
    /// # Errors
    ///
    /// `Overflow` if a line's net amount leaves the decimal range.
    pub fn generate_balance_sheet(
        trial_balance: &TrialBalanceLookup,
        template: &BalanceSheetTemplate,
    ) -> Result<BalanceSheetReport, ReportError> {
        Ok(BalanceSheetReport {
            assets: Self::transcribe(trial_balance, &template.assets)?,
            liabilities_and_equity: Self::transcribe(
                trial_balance,
                &template.liabilities_and_equity,
            )?,
        })
    }

    fn transcribe(
        trial_balance: &TrialBalanceLookup,
        lines: &[TemplateLine],
    ) -> Result<Vec<ReportLine>, ReportError> {
        lines
            .iter()
            .map(|line| {
                let amount = trial_balance
                    .get(&line.code)
                    .net_credit()
                    .ok_or_else(|| ReportError::overflow(line.label.clone()))?;
                Ok(ReportLine::for_account(
                    line.label.clone(),
                    line.code.clone(),
                    amount,
                ))
            })
            .collect()
    }
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, Decimal::checked_add)
}
