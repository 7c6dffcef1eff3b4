//! Fiscal year types.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiscalYearStatus {
    /// Open for transactions. At most one fiscal year is open at a time.
    Open,
    /// Only a restricted set of operations is still allowed.
    Restricted,
    /// Being prepared, not yet open.
    InPreparation,
    /// Closed, no new transactions allowed.
    Closed,
}

impl FiscalYearStatus {
    /// Returns the wire token of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Restricted => "RESTRICTED",
            Self::InPreparation => "IN_PREPARATION",
            Self::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for FiscalYearStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown fiscal year status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fiscal year status: {0}")]
pub struct UnknownFiscalYearStatus(pub String);

impl std::str::FromStr for FiscalYearStatus {
    type Err = UnknownFiscalYearStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OPEN" => Ok(Self::Open),
            "RESTRICTED" => Ok(Self::Restricted),
            "IN_PREPARATION" => Ok(Self::InPreparation),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(UnknownFiscalYearStatus(s.to_string())),
        }
    }
}

/// A fiscal year, identified by its calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Year value (e.g., 2022).
    pub year: i32,
    /// Current status.
    pub status: FiscalYearStatus,
}

impl FiscalYear {
    /// Creates a new fiscal year.
    #[must_use]
    pub const fn new(year: i32, status: FiscalYearStatus) -> Self {
        Self { year, status }
    }

    /// Returns true if transactions can be posted to this fiscal year.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == FiscalYearStatus::Open
    }
}

/// Returns the three years ending at `reference_year`, oldest first.
///
/// Returns `None` when the window would underflow `i32`.
#[must_use]
pub fn three_year_window(reference_year: i32) -> Option<[i32; 3]> {
    let oldest = reference_year.checked_sub(2)?;
    Some([oldest, oldest + 1, reference_year])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_only_open_status_is_open() {
        assert!(FiscalYear::new(2022, FiscalYearStatus::Open).is_open());
        assert!(!FiscalYear::new(2021, FiscalYearStatus::Restricted).is_open());
        assert!(!FiscalYear::new(2023, FiscalYearStatus::InPreparation).is_open());
        assert!(!FiscalYear::new(2020, FiscalYearStatus::Closed).is_open());
    }

    #[test]
    fn test_equality_covers_year_and_status() {
        let open = FiscalYear::new(2022, FiscalYearStatus::Open);
        assert_eq!(open, FiscalYear::new(2022, FiscalYearStatus::Open));
        assert_ne!(open, FiscalYear::new(2022, FiscalYearStatus::Closed));
        assert_ne!(open, FiscalYear::new(2021, FiscalYearStatus::Open));
    }

    #[rstest]
    #[case(FiscalYearStatus::Open, "OPEN")]
    #[case(FiscalYearStatus::Restricted, "RESTRICTED")]
    #[case(FiscalYearStatus::InPreparation, "IN_PREPARATION")]
    #[case(FiscalYearStatus::Closed, "CLOSED")]
    fn test_status_tokens(#[case] status: FiscalYearStatus, #[case] token: &str) {
        assert_eq!(status.to_string(), token);
        assert_eq!(FiscalYearStatus::from_str(token).unwrap(), status);
        assert_eq!(
            FiscalYearStatus::from_str(&token.to_lowercase()).unwrap(),
            status
        );
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            format!("\"{token}\"")
        );
    }

    #[test]
    fn test_unknown_status() {
        let err = FiscalYearStatus::from_str("ARCHIVED").unwrap_err();
        assert_eq!(err.to_string(), "Unknown fiscal year status: ARCHIVED");
        assert!(FiscalYearStatus::from_str("").is_err());
    }

    #[test]
    fn test_three_year_window() {
        assert_eq!(three_year_window(2022), Some([2020, 2021, 2022]));
        assert_eq!(three_year_window(1), Some([-1, 0, 1]));
        assert_eq!(three_year_window(i32::MIN + 2), Some([i32::MIN, i32::MIN + 1, i32::MIN + 2]));
        assert_eq!(three_year_window(i32::MIN + 1), None);
    }
}
