//! Service line store
//!
//! Owns the mutable list of service lines behind the entry screen. The
//! store validates at the form boundary (the one hard rule: a disease code
//! before save), assigns ids, and recomputes totals on demand - derived
//! figures are never stored.

use shared::error::{AppResult, ErrorCode};
use shared::models::{ServiceLine, ServiceLineForm, ServiceStatus};
use shared::util::snowflake_id;
use shared::AppError;

use crate::pricing::{calculate_document_totals, DocumentTotals};

/// In-memory list of entered service lines
#[derive(Debug, Clone, Default)]
pub struct ServiceLineStore {
    lines: Vec<ServiceLine>,
}

impl ServiceLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list (e.g. fixture-seeded)
    pub fn with_lines(lines: Vec<ServiceLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ServiceLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ServiceLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Add a new line from the entry form
    ///
    /// New lines start pending; the id is assigned here.
    pub fn add(&mut self, form: ServiceLineForm) -> AppResult<&ServiceLine> {
        validate_form(&form)?;
        let line = ServiceLine {
            id: format!("srv-{}", snowflake_id()),
            code: form.code,
            name: form.name,
            quantity: form.quantity,
            unit_price: form.unit_price,
            discount_percent: form.discount_percent,
            tlk_compensation: form.tlk_compensation,
            not_compensated: form.not_compensated,
            vat_rate: form.vat_rate,
            disease_code: form.disease_code,
            info: form.info,
            status: ServiceStatus::Pending,
            created_at: None,
            entered_by: None,
        };
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Replace an existing line's form fields
    ///
    /// Id, status and audit fields are preserved.
    pub fn update(&mut self, id: &str, form: ServiceLineForm) -> AppResult<&ServiceLine> {
        validate_form(&form)?;
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or_else(|| line_not_found(id))?;

        line.code = form.code;
        line.name = form.name;
        line.quantity = form.quantity;
        line.unit_price = form.unit_price;
        line.discount_percent = form.discount_percent;
        line.tlk_compensation = form.tlk_compensation;
        line.not_compensated = form.not_compensated;
        line.vat_rate = form.vat_rate;
        line.disease_code = form.disease_code;
        line.info = form.info;

        Ok(line)
    }

    /// Remove a line, returning it
    pub fn remove(&mut self, id: &str) -> AppResult<ServiceLine> {
        let idx = self
            .lines
            .iter()
            .position(|line| line.id == id)
            .ok_or_else(|| line_not_found(id))?;
        Ok(self.lines.remove(idx))
    }

    /// Document totals over the current lines
    pub fn totals(&self) -> DocumentTotals {
        calculate_document_totals(&self.lines)
    }
}

/// The one hard validation: a disease code is required before save
fn validate_form(form: &ServiceLineForm) -> AppResult<()> {
    if form.disease_code.trim().is_empty() {
        return Err(
            AppError::new(ErrorCode::DiseaseCodeRequired).with_detail("field", "diseaseCode")
        );
    }
    Ok(())
}

fn line_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::ServiceLineNotFound).with_detail("id", id)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_amount;

    fn make_form(disease_code: &str) -> ServiceLineForm {
        ServiceLineForm {
            code: "B210".to_string(),
            name: "Gydytojo konsultacija".to_string(),
            quantity: "2".to_string(),
            unit_price: "30,00".to_string(),
            tlk_compensation: "10,00".to_string(),
            not_compensated: false,
            vat_rate: 21,
            disease_code: disease_code.to_string(),
            ..ServiceLineForm::default()
        }
    }

    #[test]
    fn test_add_assigns_id_and_pending_status() {
        let mut store = ServiceLineStore::new();

        let line = store.add(make_form("A10.1")).expect("valid form");

        assert!(line.id.starts_with("srv-"));
        assert_eq!(line.status, ServiceStatus::Pending);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_without_disease_code_rejected() {
        let mut store = ServiceLineStore::new();

        let err = store.add(make_form("  ")).unwrap_err();

        assert_eq!(err.code, ErrorCode::DiseaseCodeRequired);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_id_and_status() {
        let mut store = ServiceLineStore::new();
        let id = store.add(make_form("A10.1")).expect("valid form").id.clone();

        let mut changed = make_form("H47.0");
        changed.quantity = "3".to_string();
        let line = store.update(&id, changed).expect("known id");

        assert_eq!(line.id, id);
        assert_eq!(line.quantity, "3");
        assert_eq!(line.disease_code, "H47.0");
        assert_eq!(line.status, ServiceStatus::Pending);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = ServiceLineStore::new();

        let err = store.update("srv-missing", make_form("A10.1")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ServiceLineNotFound);
    }

    #[test]
    fn test_remove_round_trip() {
        let mut store = ServiceLineStore::new();
        let id = store.add(make_form("A10.1")).expect("valid form").id.clone();

        let removed = store.remove(&id).expect("known id");

        assert_eq!(removed.id, id);
        assert!(store.is_empty());
        assert_eq!(
            store.remove(&id).unwrap_err().code,
            ErrorCode::ServiceLineNotFound
        );
    }

    #[test]
    fn test_totals_recompute_after_mutation() {
        let mut store = ServiceLineStore::new();
        let id = store.add(make_form("A10.1")).expect("valid form").id.clone();

        // 2 x 30,00 minus 2 x 10,00 TLK
        assert_eq!(format_amount(store.totals().client_total), "40,00");

        let mut changed = make_form("A10.1");
        changed.not_compensated = true;
        store.update(&id, changed).expect("known id");

        assert_eq!(format_amount(store.totals().client_total), "60,00");

        store.remove(&id).expect("known id");
        assert_eq!(format_amount(store.totals().client_total), "0,00");
    }
}
