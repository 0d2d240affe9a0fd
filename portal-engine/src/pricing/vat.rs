//! VAT decomposition
//!
//! Act views report the insurer-paid amount both VAT-inclusive and
//! VAT-exclusive. Amounts are treated as VAT-inclusive and decomposed:
//!
//! ```text
//! ex_vat = rate > 0 ? inc_vat / (1 + rate/100) : inc_vat
//! vat    = inc_vat - ex_vat
//! ```

use rust_decimal::prelude::*;

/// One amount split into its VAT components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatBreakdown {
    /// The amount as given, VAT inclusive
    pub inc_vat: Decimal,
    /// The amount with VAT stripped
    pub ex_vat: Decimal,
    /// The VAT share
    pub vat: Decimal,
}

/// Decompose a VAT-inclusive amount at the given percent rate
///
/// A zero or negative rate leaves the amount untouched (no VAT share).
pub fn decompose(amount_inc_vat: Decimal, vat_rate_percent: Decimal) -> VatBreakdown {
    let ex_vat = if vat_rate_percent > Decimal::ZERO {
        amount_inc_vat / (Decimal::ONE + vat_rate_percent / Decimal::ONE_HUNDRED)
    } else {
        amount_inc_vat
    };

    VatBreakdown {
        inc_vat: amount_inc_vat,
        ex_vat,
        vat: amount_inc_vat - ex_vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_amount;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("literal decimal")
    }

    #[test]
    fn test_decompose_at_21_percent() {
        // 10,00 inc VAT at 21% -> 8,26 ex VAT + 1,74 VAT
        let split = decompose(dec("10.00"), dec("21"));

        assert_eq!(format_amount(split.ex_vat), "8,26");
        assert_eq!(format_amount(split.vat), "1,74");
        assert_eq!(split.ex_vat + split.vat, split.inc_vat);
    }

    #[test]
    fn test_zero_rate_passes_through() {
        let split = decompose(dec("45.00"), Decimal::ZERO);

        assert_eq!(split.ex_vat, dec("45.00"));
        assert_eq!(split.vat, Decimal::ZERO);
    }

    #[test]
    fn test_zero_amount() {
        let split = decompose(Decimal::ZERO, dec("21"));

        assert_eq!(split.ex_vat, Decimal::ZERO);
        assert_eq!(split.vat, Decimal::ZERO);
    }
}
