//! Receipt model

use serde::{Deserialize, Serialize};

/// Proof-of-payment document for a set of services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Receipt ID (e.g. "r-009000009390")
    pub id: String,
    /// Receipt number (e.g. "009000009390")
    pub number: String,
    /// Creation timestamp, ISO datetime
    #[serde(default)]
    pub created_at: String,
    /// Creation timestamp as displayed
    #[serde(default)]
    pub created_at_display: String,
    /// Receipt total, comma-decimal EUR
    #[serde(default)]
    pub total_eur: String,
    /// Share payable by the insured, comma-decimal EUR
    #[serde(default)]
    pub insured_due_eur: String,
}
