//! Purchase orders and their lines.

pub mod types;

pub use types::{Order, OrderLine};
