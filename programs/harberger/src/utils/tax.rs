use crate::{constants::*, error::HarbergerError};
use anchor_lang::prelude::*;

/// Seconds of taxable time between the last settlement and the tax-pause
/// boundary, clamped to zero when the boundary lies behind the clock.
pub fn elapsed_since(last_settlement_time: i64, boundary: i64) -> i64 {
    boundary.saturating_sub(last_settlement_time).max(0)
}

/// Tax owed for `elapsed_secs` of occupancy at the self-assessed `price`.
///
/// owed = price * tax_rate_bps * elapsed / (tax_period_secs * FEE_DENOMINATOR)
///
/// Floor division throughout; truncation always favors the keeper.
pub fn owed_since(
    price: u64,
    tax_rate_bps: u16,
    tax_period_secs: i64,
    elapsed_secs: i64,
) -> Result<u64> {
    if price == 0 || elapsed_secs <= 0 {
        return Ok(0);
    }

    if tax_period_secs <= 0 {
        return Err(HarbergerError::InvalidTaxPeriod.into());
    }

    let numerator = (price as u128)
        .checked_mul(tax_rate_bps as u128)
        .ok_or(HarbergerError::Overflow)?
        .checked_mul(elapsed_secs as u128)
        .ok_or(HarbergerError::Overflow)?;

    let denominator = (tax_period_secs as u128)
        .checked_mul(FEE_DENOMINATOR as u128)
        .ok_or(HarbergerError::Overflow)?;

    let owed = numerator
        .checked_div(denominator)
        .ok_or(HarbergerError::Underflow)?;

    u64::try_from(owed).map_err(|_| HarbergerError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 365 * 86_400;

    #[test]
    fn test_owed_tenth_of_a_year() {
        // price 100, 10% per year, 36.5 days elapsed (10% of the year):
        // 100 * 1000 * 3_153_600 / (31_536_000 * 10_000) = 1 exactly
        let owed = owed_since(100, 1_000, YEAR, YEAR / 10).unwrap();
        assert_eq!(owed, 1);
    }

    #[test]
    fn test_owed_truncates_toward_keeper() {
        // One second short of a full taxable unit still rounds down
        let owed = owed_since(100, 1_000, YEAR, YEAR / 10 - 1).unwrap();
        assert_eq!(owed, 0);
    }

    #[test]
    fn test_owed_full_period_full_rate() {
        let owed = owed_since(5_000, 10_000, YEAR, YEAR).unwrap();
        assert_eq!(owed, 5_000);
    }

    #[test]
    fn test_zero_price_owes_nothing() {
        // price == 0 is the never-foreclosable state
        let owed = owed_since(0, 10_000, YEAR, 10 * YEAR).unwrap();
        assert_eq!(owed, 0);
    }

    #[test]
    fn test_negative_elapsed_owes_nothing() {
        let owed = owed_since(100, 1_000, YEAR, -5).unwrap();
        assert_eq!(owed, 0);
    }

    #[test]
    fn test_maximum_price_does_not_overflow() {
        // 300% of the price cap over a full period
        let owed = owed_since(MAXIMUM_PRICE, MAX_TAX_RATE_BPS, YEAR, YEAR).unwrap();
        assert_eq!(owed, MAXIMUM_PRICE * 3);
    }

    #[test]
    fn test_elapsed_clamps_to_zero() {
        assert_eq!(elapsed_since(100, 50), 0);
        assert_eq!(elapsed_since(100, 100), 0);
        assert_eq!(elapsed_since(100, 175), 75);
    }
}
