//! Chart of Accounts.

pub mod chart;

pub use chart::{Account, ChartOfAccounts};
