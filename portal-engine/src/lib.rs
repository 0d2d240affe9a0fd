//! Partner portal calculation engine
//!
//! The computational core behind the partner portal screens: service
//! pricing and compensation splitting, VAT decomposition, document
//! aggregation, the compensation troubleshooting decision table, and the
//! fixture-backed catalog, act and receipt services.
//!
//! Everything here is synchronous and pure; services hold plain in-memory
//! collections owned by the caller. Monetary arithmetic uses
//! `rust_decimal` internally and speaks the surrounding display layer's
//! comma-decimal string convention at the boundary.

pub mod catalog;
pub mod config;
pub mod decision;
pub mod documents;
pub mod fixtures;
pub mod lines;
pub mod money;
pub mod pricing;
pub mod session;

// Re-exports
pub use catalog::CatalogService;
pub use config::Config;
pub use decision::{decide, CompensationDecision, DecisionOutcome, TroubleshootInput};
pub use documents::{ActRegistry, DateRange, ReceiptRegistry};
pub use lines::ServiceLineStore;
pub use money::{format_amount, parse_amount, parse_quantity};
pub use pricing::{
    calculate_document_totals, calculate_line, calculate_vat_totals, DocumentTotals,
    LineCalculation, VatTotals,
};
pub use session::{authorize, CardForm, CardSession};
