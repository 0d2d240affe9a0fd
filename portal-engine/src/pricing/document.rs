//! Document-level aggregation
//!
//! Sums per-line figures into the totals a document (entry table, act,
//! receipt summary) displays. Plain linear reductions over the line list:
//! order never matters.

use super::line::calculate_line;
use super::vat::decompose;
use crate::money::format_amount;
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::ServiceLine;

/// Summed line figures for a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTotals {
    /// Sum of gross line prices (no discount or compensation)
    pub gross_total: Decimal,
    /// Sum of line discounts
    pub discount_total: Decimal,
    /// Sum of payer (TLK) contributions
    pub compensation_total: Decimal,
    /// Sum of client payables
    pub client_total: Decimal,
    /// Sum of after-discount line prices
    pub after_discount_total: Decimal,
}

/// Document totals formatted for the display layer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotalsDisplay {
    pub gross_total: String,
    pub discount_total: String,
    pub compensation_total: String,
    pub client_total: String,
    pub after_discount_total: String,
}

impl DocumentTotals {
    /// Format the totals with the `,`-decimal convention
    pub fn display(&self) -> DocumentTotalsDisplay {
        DocumentTotalsDisplay {
            gross_total: format_amount(self.gross_total),
            discount_total: format_amount(self.discount_total),
            compensation_total: format_amount(self.compensation_total),
            client_total: format_amount(self.client_total),
            after_discount_total: format_amount(self.after_discount_total),
        }
    }
}

/// Summed VAT decomposition of the insurer-paid amounts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VatTotals {
    pub total_ex_vat: Decimal,
    pub total_vat: Decimal,
    pub total_inc_vat: Decimal,
}

/// Sum line figures across a document
pub fn calculate_document_totals(lines: &[ServiceLine]) -> DocumentTotals {
    lines
        .iter()
        .map(calculate_line)
        .fold(DocumentTotals::default(), |mut acc, figures| {
            acc.gross_total += figures.gross_total;
            acc.discount_total += figures.discount_total;
            acc.compensation_total += figures.compensation_total;
            acc.client_total += figures.client_total;
            acc.after_discount_total += figures.after_discount_total;
            acc
        })
}

/// Decompose each line's insurer-paid amount at the line's VAT rate and sum
pub fn calculate_vat_totals(lines: &[ServiceLine]) -> VatTotals {
    lines
        .iter()
        .fold(VatTotals::default(), |mut acc, line| {
            let figures = calculate_line(line);
            let split = decompose(figures.compensation_total, Decimal::from(line.vat_rate));
            acc.total_ex_vat += split.ex_vat;
            acc.total_vat += split.vat;
            acc.total_inc_vat += split.inc_vat;
            acc
        })
}

// ==================== Tests ====================
