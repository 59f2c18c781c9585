//! Account code identifiers.
//!
//! Source workbooks key accounts by small integers (1000, 1100, ...), but a
//! chart may also carry alphanumeric codes. Integer codes always sort before
//! text codes so that a numeric chart keeps its natural order.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// Identifier that uniquely keys one account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "RawAccountCode")]
pub enum AccountCode {
    /// Integer code such as `4000`.
    Numeric(i64),
    /// Any code that is not an integer.
    Text(String),
}

impl AccountCode {
    /// Parses a textual code.
    ///
    /// Returns `None` for blank input. Text holding an integer becomes a
    /// numeric code, so `"1000"` and `1000` name the same account.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            trimmed
                .parse::<i64>()
                .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Numeric),
        )
    }

    /// Builds a code from a numeric cell value.
    ///
    /// Integral values become numeric codes; anything else keeps its
    /// normalized decimal text.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if value.fract().is_zero() {
            if let Some(n) = value.to_i64() {
                return Self::Numeric(n);
            }
        }
        Self::Text(value.normalize().to_string())
    }

    /// Returns the integer value for numeric codes.
    #[must_use]
    pub const fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<i64> for AccountCode {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for AccountCode {
    fn from(value: i32) -> Self {
        Self::Numeric(i64::from(value))
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for AccountCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(n) => serializer.serialize_i64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAccountCode {
    Int(i64),
    Str(String),
}

impl TryFrom<RawAccountCode> for AccountCode {
    type Error = String;

    fn try_from(raw: RawAccountCode) -> Result<Self, Self::Error> {
        match raw {
            RawAccountCode::Int(n) => Ok(Self::Numeric(n)),
            RawAccountCode::Str(s) => {
                Self::parse(&s).ok_or_else(|| "account code cannot be blank".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1000", AccountCode::Numeric(1000))]
    #[case("  4000 ", AccountCode::Numeric(4000))]
    #[case("-7", AccountCode::Numeric(-7))]
    #[case("CASH-01", AccountCode::Text("CASH-01".to_string()))]
    #[case("1000.5", AccountCode::Text("1000.5".to_string()))]
    fn test_parse(#[case] raw: &str, #[case] expected: AccountCode) {
        assert_eq!(AccountCode::parse(raw), Some(expected));
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(AccountCode::parse(""), None);
        assert_eq!(AccountCode::parse("   "), None);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(AccountCode::from_decimal(dec!(1000)), AccountCode::Numeric(1000));
        assert_eq!(AccountCode::from_decimal(dec!(1000.00)), AccountCode::Numeric(1000));
        assert_eq!(
            AccountCode::from_decimal(dec!(12.50)),
            AccountCode::Text("12.5".to_string())
        );
    }

    #[test]
    fn test_numeric_codes_sort_before_text() {
        let mut codes = vec![
            AccountCode::Text("A100".to_string()),
            AccountCode::Numeric(5200),
            AccountCode::Numeric(1000),
            AccountCode::Numeric(300),
        ];
        codes.sort();
        assert_eq!(
            codes,
            vec![
                AccountCode::Numeric(300),
                AccountCode::Numeric(1000),
                AccountCode::Numeric(5200),
                AccountCode::Text("A100".to_string()),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountCode::Numeric(4000).to_string(), "4000");
        assert_eq!(AccountCode::Text("X-1".into()).to_string(), "X-1");
    }

    #[test]
    fn test_serde_accepts_numbers_and_numeric_strings() {
        let from_int: AccountCode = serde_json::from_str("3100").unwrap();
        let from_str: AccountCode = serde_json::from_str("\"3100\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(serde_json::to_string(&from_int).unwrap(), "3100");
        assert!(serde_json::from_str::<AccountCode>("\"  \"").is_err());
    }
}
