//! Core reporting logic for GFC.
//!
//! This crate contains pure business logic with ZERO storage or transport dependencies.
//! Fiscal years and orders are read through the ports in [`source`]; adapters live in
//! `gfc-store`.
//!
//! # Modules
//!
//! - `fiscal` - Fiscal years and their lifecycle status
//! - `orders` - Purchase orders, order lines and pre-tax totals
//! - `source` - Read ports consumed by the reporting engine
//! - `reports` - Open fiscal year lookup and three-year pre-tax totals

pub mod fiscal;
pub mod orders;
pub mod reports;
pub mod source;
