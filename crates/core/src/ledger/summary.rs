//! Per-account debit and credit totals.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;
use super::error::LedgerError;
use crate::AccountCode;

/// Debit and credit totals of one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
}

impl AccountTotals {
    /// Creates totals from a debit and a credit amount.
    #[must_use]
    pub const fn new(debit_total: Decimal, credit_total: Decimal) -> Self {
        Self {
            debit_total,
            credit_total,
        }
    }

    /// Adds one row's amounts.
    ///
    /// Returns `None` and leaves the totals unchanged if either sum leaves
    /// the decimal range.
    pub fn record(&mut self, debit: Decimal, credit: Decimal) -> Option<()> {
        let debit_total = self.debit_total.checked_add(debit)?;
        let credit_total = self.credit_total.checked_add(credit)?;
        self.debit_total = debit_total;
        self.credit_total = credit_total;
        Some(())
    }

    /// Credit minus debit (credit-normal accounts), `None` on overflow.
    #[must_use]
    pub fn net_credit(&self) -> Option<Decimal> {
        self.credit_total.checked_sub(self.debit_total)
    }

    /// Debit minus credit (debit-normal accounts), `None` on overflow.
    #[must_use]
    pub fn net_debit(&self) -> Option<Decimal> {
        self.debit_total.checked_sub(self.credit_total)
    }
}

/// Ledger totals keyed by account code.
///
/// Codes that never appeared in the ledger have implicit `(0, 0)` totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    totals: HashMap<AccountCode, AccountTotals>,
}

impl LedgerSummary {
    /// Sums every entry into its account's totals.
    ///
    /// Entries are folded left to right. Entries without an account code are
    /// skipped. Codes unknown to any chart still get their own totals.
    ///
    /// # Errors
    ///
    /// `Overflow` if an account's total leaves the decimal range.
    pub fn aggregate<'a, I>(entries: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = &'a LedgerEntry>,
    {
        let mut summary = Self::default();
        for entry in entries {
            summary.record(entry)?;
        }
        Ok(summary)
    }

    /// Adds a single entry.
    ///
    /// # Errors
    ///
    /// `Overflow` if the account's total leaves the decimal range.
    pub fn record(&mut self, entry: &LedgerEntry) -> Result<(), LedgerError> {
        let Some(code) = &entry.account_code else {
            return Ok(());
        };
        self.totals
            .entry(code.clone())
            .or_default()
            .record(entry.debit, entry.credit)
            .ok_or_else(|| LedgerError::Overflow(code.clone()))
    }

    /// Returns the totals of `code`, zero if it never appeared.
    #[must_use]
    pub fn get(&self, code: &AccountCode) -> AccountTotals {
        self.totals.get(code).copied().unwrap_or_default()
    }

    /// Returns true if `code` appeared in at least one entry.
    #[must_use]
    pub fn contains(&self, code: &AccountCode) -> bool {
        self.totals.contains_key(code)
    }

    /// Number of distinct account codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if no entry was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterates over every code that appeared, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &AccountCode> {
        self.totals.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_aggregate_sums_by_code() {
        let entries = vec![
            LedgerEntry::new(1000, dec!(100), dec!(0)),
            LedgerEntry::new(1000, dec!(0), dec!(50)),
            LedgerEntry::new(2000, dec!(0), dec!(200)),
        ];

        let summary = LedgerSummary::aggregate(&entries).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(
            summary.get(&AccountCode::Numeric(1000)),
            AccountTotals::new(dec!(100), dec!(50))
        );
        assert_eq!(
            summary.get(&AccountCode::Numeric(2000)),
            AccountTotals::new(dec!(0), dec!(200))
        );
    }

    #[test]
    fn test_uncoded_entries_are_skipped() {
        let entries = vec![
            LedgerEntry::uncoded(dec!(999), dec!(999)),
            LedgerEntry::new(1000, dec!(10), dec!(0)),
        ];

        let summary = LedgerSummary::aggregate(&entries).unwrap();

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get(&AccountCode::Numeric(1000)).debit_total, dec!(10));
    }

    #[test]
    fn test_absent_code_defaults_to_zero() {
        let summary = LedgerSummary::aggregate(&Vec::<LedgerEntry>::new()).unwrap();

        assert!(summary.is_empty());
        assert!(!summary.contains(&AccountCode::Numeric(5100)));
        assert_eq!(
            summary.get(&AccountCode::Numeric(5100)),
            AccountTotals::default()
        );
    }

    #[test]
    fn test_unknown_codes_keep_their_own_totals() {
        let entries = vec![LedgerEntry::new(9999, dec!(5), dec!(7))];

        let summary = LedgerSummary::aggregate(&entries).unwrap();

        assert!(summary.contains(&AccountCode::Numeric(9999)));
        assert_eq!(summary.get(&AccountCode::Numeric(9999)).net_credit(), Some(dec!(2)));
    }

    #[test]
    fn test_fractional_amounts_are_exact() {
        let entries: Vec<_> = (0..10)
            .map(|_| LedgerEntry::new(1000, dec!(0.1), dec!(0.2)))
            .collect();

        let totals = LedgerSummary::aggregate(&entries)
            .unwrap()
            .get(&AccountCode::Numeric(1000));

        assert_eq!(totals.debit_total, dec!(1.0));
        assert_eq!(totals.credit_total, dec!(2.0));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        // 5e28, below Decimal::MAX but not twice over.
        let huge = Decimal::from(5) * Decimal::from(10_i64.pow(14)) * Decimal::from(10_i64.pow(14));
        let entries = vec![
            LedgerEntry::new(1000, huge, dec!(0)),
            LedgerEntry::new(1000, huge, dec!(0)),
        ];

        let err = LedgerSummary::aggregate(&entries).unwrap_err();

        assert_eq!(err, LedgerError::Overflow(AccountCode::Numeric(1000)));
    }

    #[test]
    fn test_net_amount_overflow_is_none() {
        let totals = AccountTotals::new(Decimal::MIN, Decimal::MAX);

        assert_eq!(totals.net_credit(), None);
        assert_eq!(totals.net_debit(), None);
        assert_eq!(AccountTotals::new(dec!(3), dec!(5)).net_debit(), Some(dec!(-2)));
    }

    fn entry_strategy() -> impl Strategy<Value = LedgerEntry> {
        (
            prop::option::of(1000i64..1010),
            0i64..1_000_000,
            0i64..1_000_000,
        )
            .prop_map(|(code, debit, credit)| LedgerEntry {
                account_code: code.map(AccountCode::Numeric),
                debit: Decimal::new(debit, 2),
                credit: Decimal::new(credit, 2),
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Summation does not depend on row order.
        #[test]
        fn prop_aggregation_is_order_independent(
            entries in prop::collection::vec(entry_strategy(), 0..50),
        ) {
            let forward = LedgerSummary::aggregate(&entries).unwrap();
            let reversed: Vec<_> = entries.iter().rev().cloned().collect();
            let backward = LedgerSummary::aggregate(&reversed).unwrap();

            prop_assert_eq!(forward, backward);
        }

        /// Per-code totals add up to the ledger-wide totals of coded rows.
        #[test]
        fn prop_totals_preserve_grand_total(
            entries in prop::collection::vec(entry_strategy(), 0..50),
        ) {
            let summary = LedgerSummary::aggregate(&entries).unwrap();

            let expected_debit: Decimal = entries
                .iter()
                .filter(|e| e.account_code.is_some())
                .map(|e| e.debit)
                .sum();
            let actual_debit: Decimal = summary
                .codes()
                .map(|code| summary.get(code).debit_total)
                .sum();

            prop_assert_eq!(actual_debit, expected_debit);
        }
    }
}
