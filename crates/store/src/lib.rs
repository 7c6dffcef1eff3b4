//! Sources backing the GFC reporting engine.
//!
//! This crate provides the adapters behind the read ports of `gfc-core`:
//! - In-memory snapshots
//! - The reference sample dataset
//! - JSON dataset files

pub mod json;
pub mod memory;
pub mod sample;

pub use json::{Dataset, JsonFileSource};
pub use memory::{InMemoryFiscalYearSource, InMemoryOrderSource};
