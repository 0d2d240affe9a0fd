//! Service line price calculator
//!
//! Derives the discount, insurer and client shares for one service line:
//! - per-unit and total discount from the discount percentage
//! - payer (TLK) contribution, forced to zero for non-compensated lines
//! - client payable, clamped at zero
//!
//! All inputs arrive as the form layer's raw strings; malformed values
//! degrade to zero via [`crate::money`], so this function is total.
//!
//! Uses rust_decimal for precision calculations.

use crate::money::{format_amount, parse_amount, parse_quantity};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{ServiceLine, ServiceLineForm};

/// Result of service line price calculation
#[derive(Debug, Clone, PartialEq)]
pub struct LineCalculation {
    /// Effective quantity (floored at 1)
    pub quantity: u32,
    /// Price per unit before discount
    pub unit_price: Decimal,
    /// Full price, no discount or compensation applied (unit * quantity)
    pub gross_total: Decimal,
    /// Discount amount per unit
    pub discount_per_unit: Decimal,
    /// Discount amount for the whole line
    pub discount_total: Decimal,
    /// Price per unit after discount
    pub after_discount_per_unit: Decimal,
    /// Line price after discount
    pub after_discount_total: Decimal,
    /// Payer (TLK) contribution per unit
    pub compensation_per_unit: Decimal,
    /// Payer contribution for the whole line
    pub compensation_total: Decimal,
    /// Client payable per unit
    pub client_per_unit: Decimal,
    /// Client payable for the whole line
    pub client_total: Decimal,
}

/// Line figures formatted for the display layer (comma-decimal strings)
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineDisplay {
    pub quantity: u32,
    pub gross_total: String,
    pub discount_total: String,
    pub compensation_total: String,
    pub client_per_unit: String,
    pub client_total: String,
    pub after_discount_total: String,
}

impl LineCalculation {
    /// Format the figures with the `,`-decimal convention
    pub fn display(&self) -> LineDisplay {
        LineDisplay {
            quantity: self.quantity,
            gross_total: format_amount(self.gross_total),
            discount_total: format_amount(self.discount_total),
            compensation_total: format_amount(self.compensation_total),
            client_per_unit: format_amount(self.client_per_unit),
            client_total: format_amount(self.client_total),
            after_discount_total: format_amount(self.after_discount_total),
        }
    }
}

/// Calculate line figures from raw field values
///
/// # Calculation Steps
/// 1. Coerce quantity to a positive integer (floor at 1)
/// 2. Discount per unit = unit price * discount% / 100
/// 3. After-discount price, clamped at zero
/// 4. Payer contribution per unit (zero when not compensated)
/// 5. Client payable = after-discount minus payer share, clamped at zero
pub fn calculate_line_figures(
    quantity: &str,
    unit_price: &str,
    discount_percent: &str,
    tlk_compensation: &str,
    not_compensated: bool,
) -> LineCalculation {
    let hundred = Decimal::ONE_HUNDRED;

    let q = parse_quantity(quantity);
    let quantity_dec = Decimal::from(q);
    let unit = parse_amount(unit_price);
    let discount_pct = parse_amount(discount_percent);

    let discount_per_unit = unit * discount_pct / hundred;
    let discount_total = discount_per_unit * quantity_dec;
    let after_discount_per_unit = (unit - discount_per_unit).max(Decimal::ZERO);
    let after_discount_total = after_discount_per_unit * quantity_dec;

    let compensation_per_unit = if not_compensated {
        Decimal::ZERO
    } else {
        parse_amount(tlk_compensation)
    };
    let compensation_total = compensation_per_unit * quantity_dec;

    let client_per_unit = (after_discount_per_unit - compensation_per_unit).max(Decimal::ZERO);
    let client_total = (after_discount_total - compensation_total).max(Decimal::ZERO);

    LineCalculation {
        quantity: q,
        unit_price: unit,
        gross_total: unit * quantity_dec,
        discount_per_unit,
        discount_total,
        after_discount_per_unit,
        after_discount_total,
        compensation_per_unit,
        compensation_total,
        client_per_unit,
        client_total,
    }
}

/// Calculate figures for a stored service line
pub fn calculate_line(line: &ServiceLine) -> LineCalculation {
    calculate_line_figures(
        &line.quantity,
        &line.unit_price,
        &line.discount_percent,
        &line.tlk_compensation,
        line.not_compensated,
    )
}

/// Calculate figures for an in-flight form (live preview while editing)
pub fn calculate_form(form: &ServiceLineForm) -> LineCalculation {
    calculate_line_figures(
        &form.quantity,
        &form.unit_price,
        &form.discount_percent,
        &form.tlk_compensation,
        form.not_compensated,
    )
}

// ==================== Tests ====================
