//! Fiscal year management.

pub mod year;

pub use year::{FiscalYear, FiscalYearStatus, UnknownFiscalYearStatus, three_year_window};
