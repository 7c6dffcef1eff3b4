//! In-memory sources.

use gfc_core::fiscal::FiscalYear;
use gfc_core::orders::Order;
use gfc_core::source::{FiscalYearSource, OrderSource, SourceError};

/// Fiscal year source over a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFiscalYearSource {
    fiscal_years: Vec<FiscalYear>,
}

impl InMemoryFiscalYearSource {
    /// Creates a source returning `fiscal_years` on every read.
    #[must_use]
    pub fn new(fiscal_years: Vec<FiscalYear>) -> Self {
        Self { fiscal_years }
    }
}

impl FiscalYearSource for InMemoryFiscalYearSource {
    fn find_all(&self) -> Result<Vec<FiscalYear>, SourceError> {
        Ok(self.fiscal_years.clone())
    }
}

/// Order source over a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderSource {
    orders: Vec<Order>,
}

impl InMemoryOrderSource {
    /// Creates a source returning `orders` on every read.
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

impl OrderSource for InMemoryOrderSource {
    fn find_all(&self) -> Result<Vec<Order>, SourceError> {
        Ok(self.orders.clone())
    }
}
