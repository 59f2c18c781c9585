//! Ledger entry domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountCode;

/// A single General Ledger row.
///
/// Blank amount cells are read as zero before an entry is built, so both
/// sides always carry a value. A row without an account code is kept as an
/// entry with `account_code: None` and ignored by aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The account affected by this row.
    pub account_code: Option<AccountCode>,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

impl LedgerEntry {
    /// Creates an entry posted to `code`.
    #[must_use]
    pub fn new(code: impl Into<AccountCode>, debit: Decimal, credit: Decimal) -> Self {
        Self {
            account_code: Some(code.into()),
            debit,
            credit,
        }
    }

    /// Creates an entry whose account code cell was blank.
    #[must_use]
    pub const fn uncoded(debit: Decimal, credit: Decimal) -> Self {
        Self {
            account_code: None,
            debit,
            credit,
        }
    }
}
