//! Act and receipt registries
//!
//! In-memory views over the fixture-loaded billing documents, with the
//! date-range and text filters the list screens apply, and recomputed VAT
//! totals for one act.

use chrono::{NaiveDate, NaiveDateTime};
use shared::error::AppResult;
use shared::models::{Act, Receipt};
use shared::AppError;

use crate::pricing::{calculate_vat_totals, VatTotals};

/// Inclusive creation-date filter
///
/// Mirrors the list screens: the `to` bound covers the whole day, and a
/// document whose timestamp is missing or unparseable is never filtered
/// out by date.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Whether the given ISO datetime falls inside the range
    pub fn contains(&self, iso_datetime: &str) -> bool {
        let Some(date) = parse_iso_date(iso_datetime) else {
            return true;
        };
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<NaiveDateTime>()
        .map(|dt| dt.date())
        .or_else(|_| trimmed.parse::<NaiveDate>())
        .ok()
}

// =============================================================================
// ActRegistry
// =============================================================================

/// Registry of acts (aggregated billing documents)
#[derive(Debug, Clone, Default)]
pub struct ActRegistry {
    acts: Vec<Act>,
}

impl ActRegistry {
    pub fn new(acts: Vec<Act>) -> Self {
        Self { acts }
    }

    /// Build a registry from fixture JSON (an array of acts)
    pub fn from_json(data: &str) -> AppResult<Self> {
        let acts: Vec<Act> = serde_json::from_str(data)
            .map_err(|e| AppError::fixture_parse(format!("acts: {}", e)))?;
        Ok(Self::new(acts))
    }

    pub fn acts(&self) -> &[Act] {
        &self.acts
    }

    pub fn find(&self, id: &str) -> Option<&Act> {
        self.acts.iter().find(|act| act.id == id)
    }

    /// Filter by creation date range and free-text query
    ///
    /// The query is matched case-insensitively against the number, status,
    /// both totals, both display dates and the operator, joined - the same
    /// haystack the act list searches.
    pub fn filter(&self, range: &DateRange, query: &str) -> Vec<&Act> {
        let q = query.trim().to_lowercase();
        self.acts
            .iter()
            .filter(|act| range.contains(&act.created_at))
            .filter(|act| {
                if q.is_empty() {
                    return true;
                }
                let haystack = [
                    act.number.as_str(),
                    act.status.as_str(),
                    act.total_eur.as_str(),
                    act.total_no_vat_eur.as_str(),
                    act.created_at_display.as_str(),
                    act.invoice_received_at_display.as_str(),
                    act.entered_by.as_str(),
                ]
                .join(" ")
                .to_lowercase();
                haystack.contains(&q)
            })
            .collect()
    }

    /// Recompute the act's insurer VAT totals from its service lines
    pub fn vat_totals(act: &Act) -> VatTotals {
        calculate_vat_totals(&act.services)
    }
}

// =============================================================================
// ReceiptRegistry
// =============================================================================

/// Registry of receipts
#[derive(Debug, Clone, Default)]
pub struct ReceiptRegistry {
    receipts: Vec<Receipt>,
}

impl ReceiptRegistry {
    pub fn new(receipts: Vec<Receipt>) -> Self {
        Self { receipts }
    }

    /// Build a registry from fixture JSON (an array of receipts)
    pub fn from_json(data: &str) -> AppResult<Self> {
        let receipts: Vec<Receipt> = serde_json::from_str(data)
            .map_err(|e| AppError::fixture_parse(format!("receipts: {}", e)))?;
        Ok(Self::new(receipts))
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn find(&self, id: &str) -> Option<&Receipt> {
        self.receipts.iter().find(|receipt| receipt.id == id)
    }

    /// Filter by creation date range and receipt number substring
    pub fn filter(&self, range: &DateRange, number: &str) -> Vec<&Receipt> {
        let needle = number.trim();
        self.receipts
            .iter()
            .filter(|receipt| range.contains(&receipt.created_at))
            .filter(|receipt| needle.is_empty() || receipt.number.contains(needle))
            .collect()
    }
}

// ==================== Tests ====================
