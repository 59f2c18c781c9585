//! Sum and average over labelled rows.
//!
//! A sheet is read as `label -> values`; each request names a label and the
//! calculation to run on its values.

pub mod error;
pub mod service;

pub use error::TabulateError;
pub use service::{Calculation, CalculationRequest, LabeledValues, TabulateService, Tabulated};
