//! Pricing Engine Module
//!
//! Per-line price/compensation derivation, VAT decomposition and
//! document-level aggregation. All functions are pure and total:
//! malformed input degrades to zero, never an error.

mod document;
mod line;
pub mod vat;

pub use document::*;
pub use line::*;
pub use vat::{decompose, VatBreakdown};
