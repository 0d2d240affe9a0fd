//! Act (billing document) model

use super::service_line::ServiceLine;
use serde::{Deserialize, Serialize};

/// Aggregated billing/payment document listing multiple service lines
///
/// The stored totals (`total_eur`, `total_no_vat_eur`) are what the
/// document was issued with; the engine can recompute them from the lines
/// for verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Act {
    /// Act ID (e.g. "act-202210121")
    pub id: String,
    /// Document number (e.g. "Aktas202210121")
    pub number: String,
    /// Document status label
    #[serde(default)]
    pub status: String,
    /// Issued total, VAT inclusive, comma-decimal EUR
    #[serde(default)]
    pub total_eur: String,
    /// Issued total excluding VAT, comma-decimal EUR
    #[serde(default)]
    pub total_no_vat_eur: String,
    /// Creation timestamp, ISO datetime
    #[serde(default)]
    pub created_at: String,
    /// Creation date as displayed
    #[serde(default)]
    pub created_at_display: String,
    /// Invoice receipt timestamp, ISO datetime
    #[serde(default)]
    pub invoice_received_at: String,
    /// Invoice receipt date as displayed
    #[serde(default)]
    pub invoice_received_at_display: String,
    /// Operator who entered the document
    #[serde(default)]
    pub entered_by: String,
    /// Service lines covered by this act
    #[serde(default)]
    pub services: Vec<ServiceLine>,
}
