//! Unified error codes for the partner portal core
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Card session errors
//! - 2xxx: Service line errors
//! - 3xxx: Catalog errors
//! - 4xxx: Document errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Card session ====================
    /// Card has not been authorized
    CardNotAuthorized = 1001,
    /// Card number fragment is not the expected digit group
    InvalidCardDigits = 1002,
    /// Personal code fragment is not the expected digit group
    InvalidPersonalCodeDigits = 1003,

    // ==================== 2xxx: Service lines ====================
    /// Service line not found
    ServiceLineNotFound = 2001,
    /// Disease code is required before a line can be saved
    DiseaseCodeRequired = 2002,

    // ==================== 3xxx: Catalog ====================
    /// Catalog entry not found
    CatalogEntryNotFound = 3001,

    // ==================== 4xxx: Documents ====================
    /// Act not found
    ActNotFound = 4001,
    /// Receipt not found
    ReceiptNotFound = 4002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Fixture file could not be read
    FixtureIo = 9401,
    /// Fixture file could not be parsed
    FixtureParse = 9402,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::CardNotAuthorized => "Card has not been authorized",
            Self::InvalidCardDigits => "Card number digits are invalid",
            Self::InvalidPersonalCodeDigits => "Personal code digits are invalid",
            Self::ServiceLineNotFound => "Service line not found",
            Self::DiseaseCodeRequired => "Disease code is required",
            Self::CatalogEntryNotFound => "Catalog entry not found",
            Self::ActNotFound => "Act not found",
            Self::ReceiptNotFound => "Receipt not found",
            Self::InternalError => "Internal error",
            Self::FixtureIo => "Fixture file could not be read",
            Self::FixtureParse => "Fixture file could not be parsed",
        }
    }

    /// Numeric value of this code
    pub fn value(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.value())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error raised when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            1001 => Self::CardNotAuthorized,
            1002 => Self::InvalidCardDigits,
            1003 => Self::InvalidPersonalCodeDigits,
            2001 => Self::ServiceLineNotFound,
            2002 => Self::DiseaseCodeRequired,
            3001 => Self::CatalogEntryNotFound,
            4001 => Self::ActNotFound,
            4002 => Self::ReceiptNotFound,
            9001 => Self::InternalError,
            9401 => Self::FixtureIo,
            9402 => Self::FixtureParse,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
