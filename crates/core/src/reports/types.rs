//! Report data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::ReportError;
use crate::fiscal::three_year_window;

/// Pre-tax order totals for a reference year and the two preceding years.
///
/// Always holds exactly three entries; a year without orders maps to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeYearTotals {
    reference_year: i32,
    totals: BTreeMap<i32, Decimal>,
}

impl ThreeYearTotals {
    /// Creates an all-zero report for the window ending at `reference_year`.
    ///
    /// Returns `None` when the window would underflow `i32`.
    #[must_use]
    pub fn zeroed(reference_year: i32) -> Option<Self> {
        let totals = three_year_window(reference_year)?
            .into_iter()
            .map(|year| (year, Decimal::ZERO))
            .collect();
        Some(Self {
            reference_year,
            totals,
        })
    }

    /// Returns true if `year` is one of the three years of the window.
    #[must_use]
    pub fn covers(&self, year: i32) -> bool {
        self.totals.contains_key(&year)
    }

    /// Adds `amount` to the bucket of `year`.
    ///
    /// Returns `Ok(false)`, leaving the report untouched, when `year` is
    /// outside the window.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::AmountOverflow` if the bucket would overflow;
    /// the bucket keeps its previous value.
    pub fn accumulate(&mut self, year: i32, amount: Decimal) -> Result<bool, ReportError> {
        let Some(bucket) = self.totals.get_mut(&year) else {
            return Ok(false);
        };
        *bucket = bucket
            .checked_add(amount)
            .ok_or(ReportError::AmountOverflow { year })?;
        Ok(true)
    }

    /// Most recent year of the window.
    #[must_use]
    pub const fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Total for `year`, `None` outside the window.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<Decimal> {
        self.totals.get(&year).copied()
    }

    /// Number of years in the report (always 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if the report holds no year.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterates over `(year, total)` pairs, oldest year first.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Decimal)> + '_ {
        self.totals.iter().map(|(year, total)| (*year, *total))
    }

    /// Sum of the three yearly totals, `None` if it overflows `Decimal`.
    #[must_use]
    pub fn grand_total(&self) -> Option<Decimal> {
        self.totals
            .values()
            .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
    }

    /// Consumes the report and returns the year to total mapping.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<i32, Decimal> {
        self.totals
    }
}

impl Serialize for ThreeYearTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ThreeYearTotals", 3)?;
        state.serialize_field("reference_year", &self.reference_year)?;
        state.serialize_field("totals", &self.totals)?;
        state.serialize_field("grand_total", &self.grand_total())?;
        state.end()
    }
}
