//! Common types used across the application.

pub mod amount;

pub use amount::{AMOUNT_SCALE, format_amount, round_amount};
