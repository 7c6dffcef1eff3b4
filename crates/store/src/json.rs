//! JSON dataset file source.
//!
//! The file holds both collections:
//!
//! ```json
//! {
//!   "fiscal_years": [{ "year": 2022, "status": "OPEN" }],
//!   "orders": [{
//!     "order_number": "cde1",
//!     "supplier_code": "fou1",
//!     "created_at": "2022-05-24T10:45:00",
//!     "lines": [{ "line_id": "ligne11", "article_code": "art11", "quantity": "4", "unit_price": "2" }]
//!   }]
//! }
//! ```
//!
//! Amounts should be written as strings to keep them exact.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use gfc_core::fiscal::FiscalYear;
use gfc_core::orders::Order;
use gfc_core::source::{FiscalYearSource, OrderSource, SourceError};

/// Content of a dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Known fiscal years.
    #[serde(default)]
    pub fiscal_years: Vec<FiscalYear>,
    /// Known orders with their lines.
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Deserialize)]
struct FiscalYearsOnly {
    #[serde(default)]
    fiscal_years: Vec<FiscalYear>,
}

#[derive(Deserialize)]
struct OrdersOnly {
    #[serde(default)]
    orders: Vec<Order>,
}

/// Source reading a [`Dataset`] file.
///
/// The file is read again on every call, so edits are picked up without
/// restarting. Each port decodes only its own collection: the other one must
/// be well-formed JSON but its content is not checked, so a bad order does
/// not hide the fiscal years and the other way round.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source over the file at `path`. The file is not opened yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the dataset file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the whole dataset.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the file cannot be read and
    /// `SourceError::Malformed` if it is not a valid dataset.
    pub fn load(&self) -> Result<Dataset, SourceError> {
        let dataset: Dataset = self.decode(&self.read()?)?;

        debug!(
            path = %self.path.display(),
            fiscal_years = dataset.fiscal_years.len(),
            orders = dataset.orders.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    fn read(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to read dataset");
            SourceError::Unavailable(format!("{}: {e}", self.path.display()))
        })
    }

    fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<T, SourceError> {
        serde_json::from_str(content).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to decode dataset");
            SourceError::Malformed(format!("{}: {e}", self.path.display()))
        })
    }
}

impl FiscalYearSource for JsonFileSource {
    fn find_all(&self) -> Result<Vec<FiscalYear>, SourceError> {
        let FiscalYearsOnly { fiscal_years } = self.decode(&self.read()?)?;
        debug!(path = %self.path.display(), count = fiscal_years.len(), "Loaded fiscal years");
        Ok(fiscal_years)
    }
}

impl OrderSource for JsonFileSource {
    fn find_all(&self) -> Result<Vec<Order>, SourceError> {
        let OrdersOnly { orders } = self.decode(&self.read()?)?;
        debug!(path = %self.path.display(), count = orders.len(), "Loaded orders");
        Ok(orders)
    }
}
