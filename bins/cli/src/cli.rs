//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ledgerbook_core::tabulate::CalculationRequest;

/// Populate the report sheets of an accounting workbook.
#[derive(Debug, Parser)]
#[command(name = "ledgerbook", version, about)]
pub struct Cli {
    /// Workbook file. Overrides `LEDGERBOOK__WORKBOOK__PATH`.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub workbook: Option<PathBuf>,

    /// Print the derived reports as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations on the workbook.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild the Trial Balance from the Chart of Accounts and General Ledger
    TrialBalance,
    /// Fill the Income Statement from the Trial Balance
    IncomeStatement,
    /// Fill the Balance Sheet from the Trial Balance
    BalanceSheet,
    /// Run all three steps in order
    All,
    /// Sum or average labelled rows of one sheet into another
    Tabulate {
        /// Sheet to read
        #[arg(long)]
        input: String,
        /// Sheet to write, created if missing
        #[arg(long)]
        output: String,
        /// Calculation per label, e.g. `Value1=sum`
        #[arg(long = "calc", value_name = "LABEL=sum|average", required = true)]
        requests: Vec<CalculationRequest>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use ledgerbook_core::tabulate::Calculation;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tabulate() {
        let cli = Cli::try_parse_from([
            "ledgerbook",
            "--workbook",
            "book.xlsx",
            "tabulate",
            "--input",
            "Input",
            "--output",
            "Output",
            "--calc",
            "Value1=sum",
            "--calc",
            "Value2=average",
        ])
        .unwrap();

        assert_eq!(cli.workbook, Some(PathBuf::from("book.xlsx")));
        match cli.command {
            Command::Tabulate { requests, .. } => {
                assert_eq!(requests[1], CalculationRequest::new("Value2", Calculation::Average));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_reject_unknown_calculation() {
        let result = Cli::try_parse_from([
            "ledgerbook",
            "tabulate",
            "--input",
            "Input",
            "--output",
            "Output",
            "--calc",
            "Value1=median",
        ]);

        assert!(result.is_err());
    }
}
