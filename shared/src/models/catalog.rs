//! Catalog entry model

use serde::{Deserialize, Serialize};

/// Service catalog entry as bundled in `katalogas.json`
///
/// All monetary and percentage fields are comma-decimal strings; dates are
/// `YYYY-MM-DD`. Fields are tolerant of being absent in the fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Service code (e.g. "A112")
    #[serde(default)]
    pub code: String,
    /// Service name
    #[serde(default)]
    pub name: String,
    /// Price per unit, comma-decimal EUR
    #[serde(default)]
    pub unit_price: String,
    /// VAT rate in percent, comma-decimal
    #[serde(default)]
    pub vat_rate: String,
    /// Payer (TLK) contribution per unit, comma-decimal EUR
    #[serde(default)]
    pub tlk_compensation: String,
    /// Default discount percentage, comma-decimal
    #[serde(default)]
    pub discount_percent: String,
    /// First day the entry is orderable
    #[serde(default)]
    pub valid_from: String,
    /// Last day the entry is orderable
    #[serde(default)]
    pub valid_to: String,
}

/// Compensation status derived from a catalog entry's TLK contribution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CompensationStatus {
    /// The insurer contributes toward this service (tlk > 0)
    InsurerApproved,
    /// The insurer does not contribute
    InsurerNotApproved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_fixture_entry_deserializes() {
        let json = r#"{"code": "A112", "name": "Konsultacija", "unitPrice": "45,00"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).expect("valid entry");
        assert_eq!(entry.code, "A112");
        assert_eq!(entry.tlk_compensation, "");
        assert_eq!(entry.valid_from, "");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let s = serde_json::to_string(&CompensationStatus::InsurerApproved).expect("serialize");
        assert_eq!(s, r#""insurer-approved""#);
    }
}
