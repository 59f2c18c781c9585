//! Load, transform, save orchestration.
//!
//! Each `populate_*` call loads the workbook, checks that every sheet it
//! needs exists, runs the transformation in memory and saves. The `apply_*`
//! functions are the in-memory half and perform no I/O.

use ledgerbook_core::reports::{
    BalanceSheetReport, IncomeStatementReport, ReportService, TrialBalanceReport,
};
use ledgerbook_core::tabulate::{CalculationRequest, TabulateService, Tabulated};
use ledgerbook_shared::{AppConfig, ReportTemplates, SheetLayouts};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::WorkbookResult;
use crate::model::Workbook;
use crate::schema::{BalanceSheetColumns, IncomeStatementColumns, TrialBalanceColumns};
use crate::store::WorkbookStore;
use crate::{sink, source};

/// Reports produced by [`LedgerProcessor::populate_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBundle {
    /// Trial balance written to its sheet.
    pub trial_balance: TrialBalanceReport,
    /// Income statement written to its sheet.
    pub income_statement: IncomeStatementReport,
    /// Balance sheet written to its sheet.
    pub balance_sheet: BalanceSheetReport,
}

/// Populates the report sheets of one workbook.
pub struct LedgerProcessor<S: WorkbookStore> {
    store: S,
    layouts: SheetLayouts,
    templates: ReportTemplates,
}

impl<S: WorkbookStore> LedgerProcessor<S> {
    /// Creates a processor.
    #[must_use]
    pub const fn new(store: S, layouts: SheetLayouts, templates: ReportTemplates) -> Self {
        Self {
            store,
            layouts,
            templates,
        }
    }

    /// Creates a processor with the default sheet layouts and templates.
    #[must_use]
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, SheetLayouts::default(), ReportTemplates::default())
    }

    /// Creates a processor from the loaded configuration.
    #[must_use]
    pub fn from_config(store: S, config: &AppConfig) -> Self {
        Self::new(store, config.layout.clone(), config.templates.clone())
    }

    /// Underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Rebuilds the Trial Balance sheet from the chart and the ledger.
    ///
    /// # Errors
    ///
    /// `MissingSheet` if any of the three sheets is absent, in which case
    /// nothing is saved. Persistence errors are returned as they occur.
    pub fn populate_trial_balance(&self) -> WorkbookResult<TrialBalanceReport> {
        let mut workbook = self.store.load()?;
        let report = apply_trial_balance(&mut workbook, &self.layouts)?;
        self.save(&workbook, &self.layouts.trial_balance.sheet)?;
        Ok(report)
    }

    /// Fills the Income Statement from the current Trial Balance sheet.
    ///
    /// # Errors
    ///
    /// `MissingSheet` if either sheet is absent, before any write.
    pub fn populate_income_statement(&self) -> WorkbookResult<IncomeStatementReport> {
        let mut workbook = self.store.load()?;
        let report = apply_income_statement(&mut workbook, &self.layouts, &self.templates)?;
        self.save(&workbook, &self.layouts.income_statement.sheet)?;
        Ok(report)
    }

    /// Fills the Balance Sheet from the current Trial Balance sheet.
    ///
    /// # Errors
    ///
    /// `MissingSheet` if either sheet is absent, before any write.
    pub fn populate_balance_sheet(&self) -> WorkbookResult<BalanceSheetReport> {
        let mut workbook = self.store.load()?;
        let report = apply_balance_sheet(&mut workbook, &self.layouts, &self.templates)?;
        self.save(&workbook, &self.layouts.balance_sheet.sheet)?;
        Ok(report)
    }

    /// Runs the three population steps in order, saving after each one.
    ///
    /// All five sheets are checked before the first write. A failure after a
    /// save leaves the earlier steps persisted.
    ///
    /// # Errors
    ///
    /// `MissingSheet` if any sheet is absent; persistence errors as they occur.
    pub fn populate_all(&self) -> WorkbookResult<ReportBundle> {
        let mut workbook = self.store.load()?;
        require_all(
            &workbook,
            &[
                self.layouts.chart.sheet.as_str(),
                self.layouts.ledger.sheet.as_str(),
                self.layouts.trial_balance.sheet.as_str(),
                self.layouts.income_statement.sheet.as_str(),
                self.layouts.balance_sheet.sheet.as_str(),
            ],
        )?;

        let trial_balance = apply_trial_balance(&mut workbook, &self.layouts)?;
        self.save(&workbook, &self.layouts.trial_balance.sheet)?;

        let income_statement =
            apply_income_statement(&mut workbook, &self.layouts, &self.templates)?;
        self.save(&workbook, &self.layouts.income_statement.sheet)?;

        let balance_sheet = apply_balance_sheet(&mut workbook, &self.layouts, &self.templates)?;
        self.save(&workbook, &self.layouts.balance_sheet.sheet)?;

        Ok(ReportBundle {
            trial_balance,
            income_statement,
            balance_sheet,
        })
    }

    /// Runs `requests` over the `input` sheet and writes the results to
    /// `output`, creating it if needed.
    ///
    /// # Errors
    ///
    /// `MissingSheet` if `input` is absent; `Tabulate` for non-numeric values
    /// or an average over no values. Nothing is saved on error.
    pub fn tabulate(
        &self,
        input: &str,
        output: &str,
        requests: &[CalculationRequest],
    ) -> WorkbookResult<Vec<Tabulated>> {
        let mut workbook = self.store.load()?;
        let results = apply_tabulate(&mut workbook, input, output, requests)?;
        self.save(&workbook, output)?;
        Ok(results)
    }

    fn save(&self, workbook: &Workbook, step: &str) -> WorkbookResult<()> {
        self.store.save(workbook)?;
        info!(sheet = step, "Workbook saved");
        Ok(())
    }
}

fn require_all(workbook: &Workbook, sheets: &[&str]) -> WorkbookResult<()> {
    sheets
        .iter()
        .try_for_each(|name| workbook.require(name).map(|_| ()))
}

/// Rebuilds the Trial Balance sheet in memory.
///
/// # Errors
///
/// `MissingSheet` before any write; `UnknownColumn` or `InvalidLayout` if a
/// layout does not fit its sheet; `Ledger` or `Report` if an amount leaves
/// the decimal range.
pub fn apply_trial_balance(
    workbook: &mut Workbook,
    layouts: &SheetLayouts,
) -> WorkbookResult<TrialBalanceReport> {
    let target = &layouts.trial_balance;
    require_all(
        workbook,
        &[
            layouts.chart.sheet.as_str(),
            layouts.ledger.sheet.as_str(),
            target.sheet.as_str(),
        ],
    )?;

    let chart = source::read_chart(workbook, &layouts.chart)?;
    let ledger = source::read_ledger(workbook, &layouts.ledger)?;
    let report = ReportService::generate_trial_balance(&chart, &ledger)?;

    if !report.unmatched_codes.is_empty() {
        let codes: Vec<String> = report
            .unmatched_codes
            .iter()
            .map(ToString::to_string)
            .collect();
        warn!(
            codes = %codes.join(", "),
            "Ledger codes missing from the chart of accounts were left out of the trial balance"
        );
    }

    let columns = TrialBalanceColumns::resolve(target, workbook.require(&target.sheet)?)?;
    sink::write_trial_balance(workbook.require_mut(&target.sheet)?, &columns, &report);

    debug!(
        rows = report.rows.len(),
        total_debit = %report.totals.total_debit,
        total_credit = %report.totals.total_credit,
        "Trial balance built"
    );
    Ok(report)
}

/// Fills the Income Statement sheet in memory from the Trial Balance sheet.
///
/// # Errors
///
/// `MissingSheet` before any write; layout errors as for
/// [`apply_trial_balance`].
pub fn apply_income_statement(
    workbook: &mut Workbook,
    layouts: &SheetLayouts,
    templates: &ReportTemplates,
) -> WorkbookResult<IncomeStatementReport> {
    let target = &layouts.income_statement;
    require_all(
        workbook,
        &[layouts.trial_balance.sheet.as_str(), target.sheet.as_str()],
    )?;

    let lookup = source::read_trial_balance(workbook, &layouts.trial_balance)?;
    let report = ReportService::generate_income_statement(&lookup, &templates.income_statement)?;

    let columns = IncomeStatementColumns::resolve(target, workbook.require(&target.sheet)?)?;
    sink::write_income_statement(workbook.require_mut(&target.sheet)?, &columns, &report);

    debug!(net_profit = %report.net_profit, "Income statement derived");
    Ok(report)
}

/// Fills the Balance Sheet in memory from the Trial Balance sheet.
///
/// # Errors
///
/// `MissingSheet` before any write; layout errors as for
/// [`apply_trial_balance`].
pub fn apply_balance_sheet(
    workbook: &mut Workbook,
    layouts: &SheetLayouts,
    templates: &ReportTemplates,
) -> WorkbookResult<BalanceSheetReport> {
    let target = &layouts.balance_sheet;
    require_all(
        workbook,
        &[layouts.trial_balance.sheet.as_str(), target.sheet.as_str()],
    )?;

    let lookup = source::read_trial_balance(workbook, &layouts.trial_balance)?;
    let report = ReportService::generate_balance_sheet(&lookup, &templates.balance_sheet)?;

    let columns = BalanceSheetColumns::resolve(target, workbook.require(&target.sheet)?)?;
    sink::write_balance_sheet(workbook.require_mut(&target.sheet)?, &columns, &report);

    debug!(
        assets = report.assets.len(),
        liabilities_and_equity = report.liabilities_and_equity.len(),
        "Balance sheet derived"
    );
    Ok(report)
}

/// Runs `requests` over `input` and writes the results to `output` in memory.
///
/// # Errors
///
/// `MissingSheet` if `input` is absent; `Tabulate` on bad values.
pub fn apply_tabulate(
    workbook: &mut Workbook,
    input: &str,
    output: &str,
    requests: &[CalculationRequest],
) -> WorkbookResult<Vec<Tabulated>> {
    let data = source::read_labeled_values(workbook, input)?;
    let results = TabulateService::calculate(&data, requests)?;

    let skipped = requests.len() - results.len();
    if skipped > 0 {
        debug!(skipped, "Requests for labels absent from the input were skipped");
    }

    sink::write_tabulated(workbook.sheet_or_insert(output), &results);
    Ok(results)
}
