//! Catalog service - in-memory service catalog with search and validity
//!
//! Holds the normalized `katalogas.json` entries and answers the lookups
//! the entry form and the services list need: code/name search, the
//! picker label, compensation status, the VAT-inclusive price and the
//! validity window.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{CatalogEntry, CompensationStatus};
use shared::AppError;

use crate::money::{format_amount, parse_amount};

/// In-memory catalog of insured services
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    entries: Vec<CatalogEntry>,
}

impl CatalogService {
    /// Build a catalog from raw entries, normalizing each one
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(normalize_entry).collect(),
        }
    }

    /// Build a catalog from fixture JSON (an array of entries)
    ///
    /// Unknown fields are ignored, missing fields default; only a document
    /// that is not a JSON array at all is an error.
    pub fn from_json(data: &str) -> AppResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(data)
            .map_err(|e| AppError::fixture_parse(format!("catalog: {}", e)))?;
        Ok(Self::new(entries))
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by service code
    pub fn find_by_code(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Case-insensitive substring search over code and name
    ///
    /// A blank query returns the whole catalog (the picker dropdown shows
    /// everything until the operator types).
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.code.to_lowercase().contains(&q) || entry.name.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Compensation status derived from the TLK contribution
    pub fn compensation_status(entry: &CatalogEntry) -> CompensationStatus {
        if parse_amount(&entry.tlk_compensation) > Decimal::ZERO {
            CompensationStatus::InsurerApproved
        } else {
            CompensationStatus::InsurerNotApproved
        }
    }

    /// Unit price with VAT added, formatted (`unit + unit * vat / 100`)
    pub fn price_with_vat(entry: &CatalogEntry) -> String {
        let unit = parse_amount(&entry.unit_price);
        let vat = parse_amount(&entry.vat_rate);
        format_amount(unit + unit * vat / Decimal::ONE_HUNDRED)
    }

    /// Picker label: `"<code> <name> (<unit price> EUR)"`
    pub fn label(entry: &CatalogEntry) -> String {
        format!("{} {} ({} EUR)", entry.code, entry.name, entry.unit_price)
    }

    /// Whether the entry is orderable on the given date
    ///
    /// A missing or unparseable bound does not restrict; both bounds are
    /// inclusive.
    pub fn is_valid_on(entry: &CatalogEntry, date: NaiveDate) -> bool {
        if let Some(from) = parse_fixture_date(&entry.valid_from) {
            if date < from {
                return false;
            }
        }
        if let Some(to) = parse_fixture_date(&entry.valid_to) {
            if date > to {
                return false;
            }
        }
        true
    }
}

fn parse_fixture_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Normalize one fixture entry: trim every field, collapse interior
/// whitespace in the name, default missing amounts to "0,00"
fn normalize_entry(entry: CatalogEntry) -> CatalogEntry {
    CatalogEntry {
        code: entry.code.trim().to_string(),
        name: collapse_whitespace(&entry.name),
        unit_price: default_amount(&entry.unit_price),
        vat_rate: entry.vat_rate.trim().to_string(),
        tlk_compensation: default_amount(&entry.tlk_compensation),
        discount_percent: default_amount(&entry.discount_percent),
        valid_from: entry.valid_from.trim().to_string(),
        valid_to: entry.valid_to.trim().to_string(),
    }
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn default_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "0,00".to_string()
    } else {
        trimmed.to_string()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(code: &str, name: &str, unit_price: &str, tlk: &str) -> CatalogEntry {
        CatalogEntry {
            code: code.to_string(),
            name: name.to_string(),
            unit_price: unit_price.to_string(),
            vat_rate: "21".to_string(),
            tlk_compensation: tlk.to_string(),
            discount_percent: "0,00".to_string(),
            valid_from: "2022-01-01".to_string(),
            valid_to: "2029-12-31".to_string(),
        }
    }

    fn make_catalog() -> CatalogService {
        CatalogService::new(vec![
            make_entry("A112", "Chirurgo konsultacija", "45,00", "15,00"),
            make_entry("B210", "Gydytojo konsultacija", "30,00", "10,00"),
            make_entry("C305", "Kineziterapija", "18,50", "0,00"),
        ])
    }

    // ==================== Search ====================

    #[test]
    fn test_search_matches_code_and_name() {
        let catalog = make_catalog();

        assert_eq!(catalog.search("a112").len(), 1);
        assert_eq!(catalog.search("konsultacija").len(), 2);
        assert_eq!(catalog.search("xyz").len(), 0);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let catalog = make_catalog();
        assert_eq!(catalog.search("  ").len(), 3);
    }

    #[test]
    fn test_find_by_code() {
        let catalog = make_catalog();
        assert!(catalog.find_by_code("B210").is_some());
        assert!(catalog.find_by_code("Z999").is_none());
    }

    // ==================== Derived fields ====================

    #[test]
    fn test_compensation_status_from_tlk() {
        let approved = make_entry("A112", "Konsultacija", "45,00", "15,00");
        let not_approved = make_entry("C305", "Kineziterapija", "18,50", "0,00");

        assert_eq!(
            CatalogService::compensation_status(&approved),
            CompensationStatus::InsurerApproved
        );
        assert_eq!(
            CatalogService::compensation_status(&not_approved),
            CompensationStatus::InsurerNotApproved
        );
    }

    #[test]
    fn test_price_with_vat() {
        let entry = make_entry("A112", "Konsultacija", "45,00", "15,00");
        // 45,00 + 21% = 54,45
        assert_eq!(CatalogService::price_with_vat(&entry), "54,45");
    }

    #[test]
    fn test_label() {
        let entry = make_entry("A112", "Chirurgo konsultacija", "45,00", "15,00");
        assert_eq!(
            CatalogService::label(&entry),
            "A112 Chirurgo konsultacija (45,00 EUR)"
        );
    }

    // ==================== Validity ====================

    #[test]
    fn test_validity_window_inclusive() {
        let entry = make_entry("A112", "Konsultacija", "45,00", "15,00");
        let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

        assert!(CatalogService::is_valid_on(&entry, date("2022-01-01")));
        assert!(CatalogService::is_valid_on(&entry, date("2025-06-15")));
        assert!(CatalogService::is_valid_on(&entry, date("2029-12-31")));
        assert!(!CatalogService::is_valid_on(&entry, date("2021-12-31")));
        assert!(!CatalogService::is_valid_on(&entry, date("2030-01-01")));
    }

    #[test]
    fn test_missing_bounds_do_not_restrict() {
        let mut entry = make_entry("A112", "Konsultacija", "45,00", "15,00");
        entry.valid_from = String::new();
        entry.valid_to = "not a date".to_string();
        let entry = CatalogService::new(vec![entry]).entries()[0].clone();

        let date = NaiveDate::parse_from_str("1990-01-01", "%Y-%m-%d").unwrap();
        assert!(CatalogService::is_valid_on(&entry, date));
    }

    // ==================== Normalization ====================

    #[test]
    fn test_normalization() {
        let catalog = CatalogService::new(vec![CatalogEntry {
            code: " A112 ".to_string(),
            name: "Chirurgo,  plaštakos chirurgo\n konsultacija".to_string(),
            unit_price: String::new(),
            vat_rate: " 21 ".to_string(),
            tlk_compensation: String::new(),
            discount_percent: String::new(),
            valid_from: String::new(),
            valid_to: String::new(),
        }]);

        let entry = &catalog.entries()[0];
        assert_eq!(entry.code, "A112");
        assert_eq!(entry.name, "Chirurgo, plaštakos chirurgo konsultacija");
        assert_eq!(entry.unit_price, "0,00");
        assert_eq!(entry.tlk_compensation, "0,00");
        assert_eq!(entry.vat_rate, "21");
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(CatalogService::from_json("{}").is_err());
        assert!(CatalogService::from_json("not json").is_err());
    }

    #[test]
    fn test_from_json_sparse_entries() {
        let catalog =
            CatalogService::from_json(r#"[{"code": "A112", "name": "Konsultacija"}]"#)
                .expect("valid fixture");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].unit_price, "0,00");
    }
}
