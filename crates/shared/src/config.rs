//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

use crate::layout::SheetLayouts;
use crate::templates::ReportTemplates;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Workbook location.
    pub workbook: WorkbookConfig,
    /// Sheet layouts.
    pub layout: SheetLayouts,
    /// Report templates.
    pub templates: ReportTemplates,
}

/// Workbook configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkbookConfig {
    /// Path of the workbook file. The CLI flag takes precedence.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `LEDGERBOOK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("LEDGERBOOK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColumnRef;
    use crate::templates::BalanceSheetTemplate;
    use crate::types::AccountCode;

    #[test]
    fn test_load_defaults_without_sources() {
        temp_env::with_vars_unset(["LEDGERBOOK__WORKBOOK__PATH", "RUN_MODE"], || {
            let config = AppConfig::load().unwrap();

            assert!(config.workbook.path.is_none());
            assert_eq!(config.layout, SheetLayouts::default());
            assert_eq!(config.templates, ReportTemplates::default());
        });
    }

    #[test]
    fn test_workbook_path_from_env() {
        temp_env::with_var(
            "LEDGERBOOK__WORKBOOK__PATH",
            Some("data/Manufacturing_Accounting_Simple.xlsx"),
            || {
                let config = AppConfig::load().unwrap();

                assert_eq!(
                    config.workbook.path,
                    Some(PathBuf::from("data/Manufacturing_Accounting_Simple.xlsx"))
                );
            },
        );
    }

    #[test]
    fn test_layout_column_from_env() {
        temp_env::with_vars(
            [
                ("LEDGERBOOK__LAYOUT__LEDGER__CODE", Some("6")),
                ("LEDGERBOOK__LAYOUT__LEDGER__DEBIT", Some("Debit")),
            ],
            || {
                let config = AppConfig::load().unwrap();

                assert_eq!(config.layout.ledger.code, ColumnRef::Index(6));
                assert_eq!(config.layout.ledger.debit, ColumnRef::header("Debit"));
                assert_eq!(config.layout.ledger.credit, ColumnRef::Index(5));
            },
        );
    }

    #[test]
    fn test_single_template_account_from_env() {
        temp_env::with_var(
            "LEDGERBOOK__TEMPLATES__INCOME_STATEMENT__SALES_REVENUE",
            Some("4100"),
            || {
                let config = AppConfig::load().unwrap();
                let income = &config.templates.income_statement;

                assert_eq!(income.sales_revenue, AccountCode::Numeric(4100));
                assert_eq!(income.cost_of_goods_sold, AccountCode::Numeric(5000));
                assert_eq!(income.salaries_expense, AccountCode::Numeric(5100));
                assert_eq!(config.templates.balance_sheet, BalanceSheetTemplate::default());
            },
        );
    }
}
