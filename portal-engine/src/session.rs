//! Card session
//!
//! Explicit session value produced by authorizing an insurance card at the
//! partner desk. The card form carries only the digit groups the operator
//! types; the fixed prefixes are assembled here. No global state: callers
//! own the session and logout is dropping it.

use serde::{Deserialize, Serialize};
use shared::error::{AppResult, ErrorCode};
use shared::util::now_millis;
use shared::AppError;

/// Issuer prefix of every insurance card number
pub const CARD_NUMBER_PREFIX: &str = "9440395800";
/// Fixed leading digits of the personal code
pub const PERSONAL_CODE_PREFIX: &str = "479121210";

/// Card authorization form: the digit groups the operator enters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CardForm {
    /// First card group, 2 digits
    pub c1: String,
    /// Second card group, 4 digits
    pub c2: String,
    /// Third card group, 3 digits
    pub c3: String,
    /// Last 4 digits of the personal code
    pub id4: String,
}

/// An authorized card session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardSession {
    /// Full card number (prefix + entered groups)
    pub card_number: String,
    /// Full personal code (prefix + entered digits)
    pub personal_code: String,
    /// Authorization timestamp, unix millis
    pub authorized_at: i64,
}

/// Validate the card form and build a session
pub fn authorize(form: &CardForm) -> AppResult<CardSession> {
    require_digits(&form.c1, 2, "c1", ErrorCode::InvalidCardDigits)?;
    require_digits(&form.c2, 4, "c2", ErrorCode::InvalidCardDigits)?;
    require_digits(&form.c3, 3, "c3", ErrorCode::InvalidCardDigits)?;
    require_digits(&form.id4, 4, "id4", ErrorCode::InvalidPersonalCodeDigits)?;

    Ok(CardSession {
        card_number: format!("{}{}{}{}", CARD_NUMBER_PREFIX, form.c1, form.c2, form.c3),
        personal_code: format!("{}{}", PERSONAL_CODE_PREFIX, form.id4),
        authorized_at: now_millis(),
    })
}

fn require_digits(value: &str, len: usize, field: &str, code: ErrorCode) -> AppResult<()> {
    if value.len() != len || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::with_message(
            code,
            format!("{} must be exactly {} digits", field, len),
        )
        .with_detail("field", field)
        .with_detail("expected", len as u64));
    }
    Ok(())
}

// ==================== Tests ====================
