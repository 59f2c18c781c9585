//! Tabulation service.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TabulateError;

/// Calculation applied to a row's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calculation {
    /// Sum of the values.
    Sum,
    /// Arithmetic mean of the values.
    Average,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => write!(f, "sum"),
            Self::Average => write!(f, "average"),
        }
    }
}

impl FromStr for Calculation {
    type Err = TabulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "average" => Ok(Self::Average),
            _ => Err(TabulateError::UnsupportedCalculation(s.to_string())),
        }
    }
}

/// A `label -> calculation` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Row label.
    pub label: String,
    /// Calculation to run.
    pub calculation: Calculation,
}

impl CalculationRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(label: impl Into<String>, calculation: Calculation) -> Self {
        Self {
            label: label.into(),
            calculation,
        }
    }
}

impl FromStr for CalculationRequest {
    type Err = TabulateError;

    /// Parses `LABEL=sum` or `LABEL=average`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, calculation) = s
            .rsplit_once('=')
            .ok_or_else(|| TabulateError::MalformedRequest(s.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(TabulateError::MalformedRequest(s.to_string()));
        }
        Ok(Self::new(label, calculation.parse()?))
    }
}

/// Sheet rows keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledValues {
    rows: HashMap<String, Vec<Decimal>>,
}

impl LabeledValues {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row; a repeated label replaces the earlier row.
    pub fn insert(&mut self, label: impl Into<String>, values: Vec<Decimal>) {
        self.rows.insert(label.into(), values);
    }

    /// Returns the values of `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[Decimal]> {
        self.rows.get(label).map(Vec::as_slice)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there is no row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tabulated {
    /// Row label.
    pub label: String,
    /// Calculation that produced `value`.
    pub calculation: Calculation,
    /// Result.
    pub value: Decimal,
}

/// Service running calculations over labelled rows.
pub struct TabulateService;

impl TabulateService {
    /// Runs every request whose label exists in `data`, in request order.
    ///
    /// Requests for unknown labels are skipped.
    pub fn calculate(
        data: &LabeledValues,
        requests: &[CalculationRequest],
    ) -> Result<Vec<Tabulated>, TabulateError> {
        requests
            .iter()
            .filter_map(|request| {
                data.get(&request.label)
                    .map(|values| Self::run(&request.label, request.calculation, values))
            })
            .collect()
    }

    fn run(
        label: &str,
        calculation: Calculation,
        values: &[Decimal],
    ) -> Result<Tabulated, TabulateError> {
        let sum = values
            .iter()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
            .ok_or_else(|| TabulateError::Overflow(label.to_string()))?;

        let value = match calculation {
            Calculation::Sum => sum,
            Calculation::Average => {
                if values.is_empty() {
                    return Err(TabulateError::EmptyInput(label.to_string()));
                }
                sum.checked_div(Decimal::from(values.len()))
                    .ok_or_else(|| TabulateError::Overflow(label.to_string()))?
            }
        };

        Ok(Tabulated {
            label: label.to_string(),
            calculation,
            value,
        })
    }
}
