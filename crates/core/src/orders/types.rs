//! Order data types.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced, quantified item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line identifier.
    pub line_id: String,
    /// Article code (opaque).
    pub article_code: String,
    /// Ordered quantity.
    pub quantity: Decimal,
    /// Unit price, before tax.
    pub unit_price: Decimal,
}

impl OrderLine {
    /// Creates a new order line.
    #[must_use]
    pub fn new(
        line_id: impl Into<String>,
        article_code: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            line_id: line_id.into(),
            article_code: article_code.into(),
            quantity,
            unit_price,
        }
    }

    /// Pre-tax amount of the line (unit price × quantity).
    ///
    /// Returns `None` if the product overflows `Decimal`.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// A purchase order.
///
/// Order numbers are not unique: two orders of different fiscal years may
/// share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Order number.
    pub order_number: String,
    /// Supplier code.
    pub supplier_code: String,
    /// Order lines.
    pub lines: Vec<OrderLine>,
    /// Creation timestamp. Its calendar year is the order's fiscal year.
    pub created_at: NaiveDateTime,
}

impl Order {
    /// Creates a new order.
    #[must_use]
    pub fn new(
        order_number: impl Into<String>,
        supplier_code: impl Into<String>,
        lines: Vec<OrderLine>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            supplier_code: supplier_code.into(),
            lines,
            created_at,
        }
    }

    /// Fiscal year the order belongs to.
    #[must_use]
    pub fn fiscal_year(&self) -> i32 {
        self.created_at.year()
    }

    /// Sum of the line amounts, zero for an order without lines.
    ///
    /// Returns `None` if a line amount or the sum overflows `Decimal`.
    #[must_use]
    pub fn pre_tax_total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount()?))
    }
}
