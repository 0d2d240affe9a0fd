//! Service line model
//!
//! A service line is one insured service entered at the partner desk or
//! carried by a billing document. Numeric fields are kept as the
//! comma-decimal strings the surrounding forms and fixtures use; the
//! pricing engine normalizes them on demand.

use serde::{Deserialize, Serialize};

/// Approval status of a service line
///
/// Presentational only; it never affects the arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ServiceStatus {
    /// Compensation approved by the insurer
    Approved,
    /// Waiting for insurer approval
    #[default]
    Pending,
    /// Compensation rejected
    Rejected,
    /// Insurer asked for additional information
    NeedsClarification,
}

/// Service line entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    /// Line ID (`srv-<snowflake>` for entered lines, fixture-assigned otherwise)
    pub id: String,
    /// Service code from the catalog (e.g. "A112")
    pub code: String,
    /// Service name
    pub name: String,
    /// Quantity as entered, free text ("1", "2 vnt")
    pub quantity: String,
    /// Price per unit before discount, comma-decimal EUR
    pub unit_price: String,
    /// Discount percentage per unit, comma-decimal
    #[serde(default = "zero_amount")]
    pub discount_percent: String,
    /// Payer (TLK) contribution per unit, comma-decimal EUR
    #[serde(default = "zero_amount")]
    pub tlk_compensation: String,
    /// When true the payer contribution is forced to zero
    #[serde(default)]
    pub not_compensated: bool,
    /// VAT rate in percent (e.g. 21), used only in aggregate VAT decomposition
    #[serde(default)]
    pub vat_rate: i32,
    /// Disease classification code (e.g. "H47.0"), required before save
    #[serde(default)]
    pub disease_code: String,
    /// Status note shown under the line
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entered_by: Option<String>,
}

impl ServiceLine {
    /// Whether the line is rendered flagged (rejected or not compensated)
    pub fn is_flagged(&self) -> bool {
        self.status == ServiceStatus::Rejected || self.not_compensated
    }
}

/// Service line form payload - for adding or editing a line (without id)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLineForm {
    pub code: String,
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    #[serde(default = "zero_amount")]
    pub discount_percent: String,
    #[serde(default = "zero_amount")]
    pub tlk_compensation: String,
    #[serde(default)]
    pub not_compensated: bool,
    #[serde(default)]
    pub vat_rate: i32,
    #[serde(default)]
    pub disease_code: String,
    #[serde(default)]
    pub info: String,
}

impl Default for ServiceLineForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            quantity: "1".to_string(),
            unit_price: zero_amount(),
            discount_percent: zero_amount(),
            tlk_compensation: zero_amount(),
            not_compensated: true,
            vat_rate: 0,
            disease_code: String::new(),
            info: String::new(),
        }
    }
}

fn zero_amount() -> String {
    "0,00".to_string()
}
