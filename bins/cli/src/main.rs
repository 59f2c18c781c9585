//! Ledgerbook CLI
//!
//! Main entry point for populating report sheets from the command line.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerbook_shared::{AppConfig, AppError};
use ledgerbook_workbook::{LedgerProcessor, XlsxStore};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    let path = cli
        .workbook
        .or_else(|| config.workbook.path.clone())
        .ok_or_else(|| {
            AppError::Validation(
                "no workbook given: pass --workbook or set LEDGERBOOK__WORKBOOK__PATH".to_string(),
            )
        })?;
    info!(path = %path.display(), "Using workbook");

    let processor = LedgerProcessor::from_config(XlsxStore::new(path), &config);

    match cli.command {
        Command::TrialBalance => {
            let report = processor.populate_trial_balance().map_err(AppError::from)?;
            if !cli.json {
                println!(
                    "Trial balance: {} accounts, debit {}, credit {}",
                    report.rows.len(),
                    report.totals.total_debit,
                    report.totals.total_credit
                );
                for code in &report.unmatched_codes {
                    println!("  not in chart of accounts: {code}");
                }
            }
            emit(cli.json, &report)
        }
        Command::IncomeStatement => {
            let report = processor
                .populate_income_statement()
                .map_err(AppError::from)?;
            if !cli.json {
                for line in report.lines() {
                    println!("{:<20} {}", line.label, line.amount);
                }
            }
            emit(cli.json, &report)
        }
        Command::BalanceSheet => {
            let report = processor.populate_balance_sheet().map_err(AppError::from)?;
            if !cli.json {
                for line in report.assets.iter().chain(&report.liabilities_and_equity) {
                    println!("{:<22} {}", line.label, line.amount);
                }
            }
            emit(cli.json, &report)
        }
        Command::All => {
            let bundle = processor.populate_all().map_err(AppError::from)?;
            if !cli.json {
                println!(
                    "Trial balance: {} accounts; net profit {}",
                    bundle.trial_balance.rows.len(),
                    bundle.income_statement.net_profit
                );
            }
            emit(cli.json, &bundle)
        }
        Command::Tabulate {
            input,
            output,
            requests,
        } => {
            let results = processor
                .tabulate(&input, &output, &requests)
                .map_err(AppError::from)?;
            if !cli.json {
                for result in &results {
                    println!("{} ({}) = {}", result.label, result.calculation, result.value);
                }
            }
            emit(cli.json, &results)
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T) -> anyhow::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(value)
            .context("failed to render report as JSON")?;
        println!("{rendered}");
    }
    Ok(())
}
