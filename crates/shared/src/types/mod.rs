//! Common types used across the application.

pub mod code;

pub use code::AccountCode;
