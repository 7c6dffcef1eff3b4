//! Report error types.

use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No fiscal year carries the open status.
    #[error("No open fiscal year")]
    NoOpenFiscalYear,

    /// More than one fiscal year carries the open status.
    #[error("Multiple open fiscal years: {0:?}")]
    MultipleOpenFiscalYears(Vec<i32>),

    /// The reference year leaves no room for the two preceding years.
    #[error("Reference year out of range: {0}")]
    YearOutOfRange(i32),

    /// An order amount or a yearly total does not fit in a `Decimal`.
    #[error("Amount overflow in fiscal year {year}")]
    AmountOverflow {
        /// Fiscal year whose total overflowed.
        year: i32,
    },

    /// A source failed while being read.
    #[error(transparent)]
    Source(#[from] SourceError),
}
