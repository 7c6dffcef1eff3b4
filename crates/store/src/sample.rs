//! Reference sample dataset.
//!
//! Five fiscal years (2022 open) and three orders spread over 2020-2022.
//! The three-year report for 2022 over this data is 2022: 11, 2021: 5,
//! 2020: 48.3.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use gfc_core::fiscal::{FiscalYear, FiscalYearStatus};
use gfc_core::orders::{Order, OrderLine};
use gfc_core::source::SourceError;

use crate::memory::{InMemoryFiscalYearSource, InMemoryOrderSource};

/// Sample fiscal years, 2023 down to 2019.
#[must_use]
pub fn fiscal_years() -> Vec<FiscalYear> {
    vec![
        FiscalYear::new(2023, FiscalYearStatus::InPreparation),
        FiscalYear::new(2022, FiscalYearStatus::Open),
        FiscalYear::new(2021, FiscalYearStatus::Restricted),
        FiscalYear::new(2020, FiscalYearStatus::Closed),
        FiscalYear::new(2019, FiscalYearStatus::Closed),
    ]
}

/// Sample orders, each created on May 24 at 10:45. Two of them share the
/// number `cde2`.
///
/// # Errors
///
/// Returns `SourceError::Malformed` if a creation timestamp cannot be built.
pub fn orders() -> Result<Vec<Order>, SourceError> {
    Ok(vec![
        Order::new(
            "cde1",
            "fou1",
            vec![
                OrderLine::new("ligne11", "art11", Decimal::from(4), Decimal::from(2)),
                OrderLine::new("ligne12", "art12", Decimal::from(1), Decimal::from(3)),
            ],
            created_at(2022)?,
        ),
        Order::new(
            "cde2",
            "fou1",
            vec![OrderLine::new(
                "ligne21",
                "art21",
                Decimal::from(1),
                Decimal::from(5),
            )],
            created_at(2021)?,
        ),
        Order::new(
            "cde2",
            "fou2",
            vec![
                OrderLine::new("ligne31", "art31", Decimal::from(4), Decimal::from(12)),
                OrderLine::new("ligne32", "art32", Decimal::from(3), Decimal::new(1, 1)),
            ],
            created_at(2020)?,
        ),
    ])
}

/// Sample fiscal year source.
#[must_use]
pub fn fiscal_year_source() -> InMemoryFiscalYearSource {
    InMemoryFiscalYearSource::new(fiscal_years())
}

/// Sample order source.
///
/// # Errors
///
/// Returns any error of [`orders`].
pub fn order_source() -> Result<InMemoryOrderSource, SourceError> {
    orders().map(InMemoryOrderSource::new)
}

/// Order source without any order.
#[must_use]
pub fn empty_order_source() -> InMemoryOrderSource {
    InMemoryOrderSource::default()
}

fn created_at(year: i32) -> Result<NaiveDateTime, SourceError> {
    NaiveDate::from_ymd_opt(year, 5, 24)
        .and_then(|date| date.and_hms_opt(10, 45, 0))
        .ok_or_else(|| SourceError::Malformed(format!("invalid sample timestamp in {year}")))
}
