//! Report generation service.

use std::sync::Arc;

use tracing::{debug, warn};

use super::error::ReportError;
use super::types::ThreeYearTotals;
use crate::source::{FiscalYearSource, OrderSource};

/// Service computing order reports from the fiscal year and order sources.
///
/// Stateless: every call reads each source at most once and keeps nothing
/// between calls, so a shared instance can serve concurrent callers.
pub struct ReportService<F: FiscalYearSource, O: OrderSource> {
    fiscal_years: Arc<F>,
    orders: Arc<O>,
}

impl<F: FiscalYearSource, O: OrderSource> ReportService<F, O> {
    /// Create a new report service.
    #[must_use]
    pub fn new(fiscal_years: Arc<F>, orders: Arc<O>) -> Self {
        Self {
            fiscal_years,
            orders,
        }
    }

    /// Returns the year of the single open fiscal year.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No fiscal year is open (`NoOpenFiscalYear`)
    /// - More than one fiscal year is open (`MultipleOpenFiscalYears`)
    /// - The fiscal year source fails
    pub fn current_open_fiscal_year(&self) -> Result<i32, ReportError> {
        let fiscal_years = self.fiscal_years.find_all()?;

        let mut open: Vec<i32> = fiscal_years
            .iter()
            .filter(|fiscal_year| fiscal_year.is_open())
            .map(|fiscal_year| fiscal_year.year)
            .collect();

        match open.len() {
            0 => {
                warn!(known = fiscal_years.len(), "No open fiscal year");
                Err(ReportError::NoOpenFiscalYear)
            }
            1 => {
                debug!(year = open[0], "Found open fiscal year");
                Ok(open[0])
            }
            _ => {
                open.sort_unstable();
                warn!(years = ?open, "Multiple open fiscal years");
                Err(ReportError::MultipleOpenFiscalYears(open))
            }
        }
    }

    /// Totals the pre-tax amount of orders for `reference_year` and the two
    /// preceding years.
    ///
    /// An order belongs to the calendar year of its creation timestamp.
    /// Years without orders are reported with a zero total.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `reference_year - 2` underflows (`YearOutOfRange`)
    /// - An order in the window or a yearly total overflows `Decimal`
    ///   (`AmountOverflow`)
    /// - The order source fails
    pub fn total_before_tax_over_three_years(
        &self,
        reference_year: i32,
    ) -> Result<ThreeYearTotals, ReportError> {
        let mut report = ThreeYearTotals::zeroed(reference_year)
            .ok_or(ReportError::YearOutOfRange(reference_year))?;

        let orders = self.orders.find_all()?;

        let mut retained = 0usize;
        for order in &orders {
            let year = order.fiscal_year();
            if !report.covers(year) {
                continue;
            }

            let accumulated = order
                .pre_tax_total()
                .ok_or(ReportError::AmountOverflow { year })
                .and_then(|total| report.accumulate(year, total));
            if let Err(err) = accumulated {
                warn!(order_number = %order.order_number, year, "Order total overflows");
                return Err(err);
            }
            retained += 1;
        }

        debug!(
            reference_year,
            orders = orders.len(),
            retained,
            grand_total = ?report.grand_total(),
            "Computed three-year pre-tax totals"
        );

        Ok(report)
    }

    /// Three-year pre-tax totals anchored on the current open fiscal year.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Self::current_open_fiscal_year`] or
    /// [`Self::total_before_tax_over_three_years`].
    pub fn totals_for_open_fiscal_year(&self) -> Result<ThreeYearTotals, ReportError> {
        let reference_year = self.current_open_fiscal_year()?;
        self.total_before_tax_over_three_years(reference_year)
    }
}

impl<F: FiscalYearSource, O: OrderSource> Clone for ReportService<F, O> {
    fn clone(&self) -> Self {
        Self {
            fiscal_years: Arc::clone(&self.fiscal_years),
            orders: Arc::clone(&self.orders),
        }
    }
}
