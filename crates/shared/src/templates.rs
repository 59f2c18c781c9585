//! Report templates: which account feeds which report line.

use serde::{Deserialize, Serialize};

use crate::types::AccountCode;

/// Accounts feeding the income statement formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatementTemplate {
    /// Revenue account (credit-normal).
    pub sales_revenue: AccountCode,
    /// Cost of goods sold account (debit-normal).
    pub cost_of_goods_sold: AccountCode,
    /// Salaries expense account (debit-normal).
    pub salaries_expense: AccountCode,
}

impl Default for IncomeStatementTemplate {
    fn default() -> Self {
        Self {
            sales_revenue: AccountCode::Numeric(4000),
            cost_of_goods_sold: AccountCode::Numeric(5000),
            salaries_expense: AccountCode::Numeric(5100),
        }
    }
}

/// One labelled account on a balance sheet side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLine {
    /// Display label.
    pub label: String,
    /// Source account.
    pub code: AccountCode,
}

impl TemplateLine {
    /// Creates a template line.
    #[must_use]
    pub fn new(label: impl Into<String>, code: impl Into<AccountCode>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

/// Accounts transcribed onto the balance sheet, in row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetTemplate {
    /// Asset lines.
    pub assets: Vec<TemplateLine>,
    /// Liability and equity lines.
    pub liabilities_and_equity: Vec<TemplateLine>,
}

impl Default for BalanceSheetTemplate {
    fn default() -> Self {
        Self {
            assets: vec![
                TemplateLine::new("Cash at Bank", 1000),
                TemplateLine::new("Inventory", 1200),
                TemplateLine::new("Accounts Receivable", 1100),
            ],
            liabilities_and_equity: vec![
                TemplateLine::new("Equity Share Capital", 3000),
                TemplateLine::new("Accounts Payable", 2000),
                TemplateLine::new("Retained Earnings", 3100),
            ],
        }
    }
}

/// All report templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTemplates {
    /// Income statement accounts.
    pub income_statement: IncomeStatementTemplate,
    /// Balance sheet accounts.
    pub balance_sheet: BalanceSheetTemplate,
}
