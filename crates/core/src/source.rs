//! Read ports consumed by the reporting engine.
//!
//! These traits are implemented by the store crate (in-memory snapshots, JSON
//! dataset files). The engine never knows which backing it reads from.

use thiserror::Error;

use crate::fiscal::FiscalYear;
use crate::orders::Order;

/// Failure reported by a source while reading its collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be reached or read.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The backing store returned data that could not be decoded.
    #[error("Malformed source data: {0}")]
    Malformed(String),
}

/// Read access to every known fiscal year.
pub trait FiscalYearSource: Send + Sync {
    /// Returns all fiscal years, in no particular order.
    fn find_all(&self) -> Result<Vec<FiscalYear>, SourceError>;
}

/// Read access to every known order, lines included.
pub trait OrderSource: Send + Sync {
    /// Returns all orders with their lines fully populated.
    fn find_all(&self) -> Result<Vec<Order>, SourceError>;
}
