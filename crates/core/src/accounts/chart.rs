//! Chart of Accounts index: account code to account name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::AccountCode;

/// A chart of accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account code (join key).
    pub code: AccountCode,
    /// Display name.
    pub name: String,
}

/// Registry of every valid account code and its display name.
///
/// Iteration is always in ascending code order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOfAccounts {
    accounts: BTreeMap<AccountCode, String>,
}

impl ChartOfAccounts {
    /// Creates an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from `(code, name)` rows.
    ///
    /// Rows without a code are skipped. When a code repeats, the last row wins.
    #[must_use]
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Option<AccountCode>, S)>,
        S: Into<String>,
    {
        let mut chart = Self::new();
        for (code, name) in rows {
            if let Some(code) = code {
                chart.insert(code, name);
            }
        }
        chart
    }

    /// Adds or replaces an account.
    pub fn insert(&mut self, code: AccountCode, name: impl Into<String>) {
        self.accounts.insert(code, name.into());
    }

    /// Returns the name of `code`.
    #[must_use]
    pub fn name(&self, code: &AccountCode) -> Option<&str> {
        self.accounts.get(code).map(String::as_str)
    }

    /// Returns true if `code` is a known account.
    #[must_use]
    pub fn contains(&self, code: &AccountCode) -> bool {
        self.accounts.contains_key(code)
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the chart holds no account.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates over `(code, name)` in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountCode, &str)> {
        self.accounts.iter().map(|(code, name)| (code, name.as_str()))
    }

    /// Returns the accounts in ascending code order.
    #[must_use]
    pub fn accounts(&self) -> Vec<Account> {
        self.iter()
            .map(|(code, name)| Account {
                code: code.clone(),
                name: name.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(n: i64) -> Option<AccountCode> {
        Some(AccountCode::Numeric(n))
    }

    #[test]
    fn test_from_rows_maps_code_to_name() {
        let chart = ChartOfAccounts::from_rows(vec![
            (code(1000), "Cash at Bank"),
            (code(2000), "Accounts Payable"),
        ]);

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.name(&AccountCode::Numeric(1000)), Some("Cash at Bank"));
        assert_eq!(chart.name(&AccountCode::Numeric(2000)), Some("Accounts Payable"));
        assert_eq!(chart.name(&AccountCode::Numeric(3000)), None);
    }

    #[test]
    fn test_duplicate_code_last_wins() {
        let chart = ChartOfAccounts::from_rows(vec![
            (code(1000), "Cash"),
            (code(1000), "Cash at Bank"),
        ]);

        assert_eq!(chart.len(), 1);
        assert_eq!(chart.name(&AccountCode::Numeric(1000)), Some("Cash at Bank"));
    }

    #[test]
    fn test_blank_codes_are_skipped() {
        let chart = ChartOfAccounts::from_rows(vec![(None, "Orphan"), (code(1100), "A/R")]);

        assert_eq!(chart.len(), 1);
        assert!(chart.contains(&AccountCode::Numeric(1100)));
    }

    #[test]
    fn test_iteration_is_sorted_by_code() {
        let chart = ChartOfAccounts::from_rows(vec![
            (code(5200), "Depreciation"),
            (code(1000), "Cash at Bank"),
            (Some(AccountCode::Text("Z1".into())), "Suspense"),
            (code(3000), "Equity Share Capital"),
        ]);

        let codes: Vec<String> = chart.iter().map(|(c, _)| c.to_string()).collect();
        assert_eq!(codes, vec!["1000", "3000", "5200", "Z1"]);
        assert_eq!(chart.accounts()[0].name, "Cash at Bank");
    }
}
