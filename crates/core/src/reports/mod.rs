//! Purchase-order reporting.
//!
//! This module provides the reporting engine:
//! - Current open fiscal year lookup
//! - Pre-tax order totals over a three-year window

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::ThreeYearTotals;
