use crate::{constants::*, error::HarbergerError};
use anchor_lang::prelude::*;

/// Floor of `amount * numerator_bps / FEE_DENOMINATOR`.
pub fn proportional(amount: u64, numerator_bps: u64) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(numerator_bps as u128)
        .ok_or(HarbergerError::Overflow)?
        .checked_div(FEE_DENOMINATOR as u128)
        .ok_or(HarbergerError::Underflow)?;

    u64::try_from(value).map_err(|_| HarbergerError::Overflow.into())
}

/// Royalty numerator applied when a reallocation auction settles.
///
/// The fixed reallocation royalty is floored by the tax the departing keeper
/// would have paid over one minimum-duration auction, so repeated short
/// self-triggered auctions cannot undercut the tax stream.
pub fn reallocation_royalty_bps(
    reallocation_royalty_bps: u16,
    tax_rate_bps: u16,
    keeper_minimum_duration: i64,
    tax_period_secs: i64,
) -> Result<u64> {
    if tax_period_secs <= 0 {
        return Err(HarbergerError::InvalidTaxPeriod.into());
    }

    let prorated = (tax_rate_bps as u128)
        .checked_mul(keeper_minimum_duration.max(0) as u128)
        .ok_or(HarbergerError::Overflow)?
        .checked_div(tax_period_secs as u128)
        .ok_or(HarbergerError::Underflow)? as u64;

    Ok(prorated.max(reallocation_royalty_bps as u64).min(FEE_DENOMINATOR))
}

pub struct ProceedsSplit {
    pub platform: u64,
    pub royalty: u64,
    pub remainder: u64,
}

/// Splits sale or auction proceeds three ways. The platform fee comes off the
/// gross; the royalty is taken from the net; the remainder absorbs all
/// truncation dust so the three parts always sum to `amount` exactly.
pub fn split_proceeds(amount: u64, royalty_bps: u64, platform_fee_bps: u64) -> Result<ProceedsSplit> {
    let platform = proportional(amount, platform_fee_bps)?;
    let net = amount.checked_sub(platform).ok_or(HarbergerError::Underflow)?;
    let royalty = proportional(net, royalty_bps)?;
    let remainder = net.checked_sub(royalty).ok_or(HarbergerError::Underflow)?;

    Ok(ProceedsSplit {
        platform,
        royalty,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_exact() {
        // 250 bps platform, 1000 bps royalty on an awkward amount
        let split = split_proceeds(99_999, 1_000, 250).unwrap();
        assert_eq!(split.platform, 2_499);
        assert_eq!(split.royalty, 9_750);
        assert_eq!(split.remainder, 87_750);
        assert_eq!(split.platform + split.royalty + split.remainder, 99_999);
    }

    #[test]
    fn test_split_full_royalty() {
        let split = split_proceeds(1_000, FEE_DENOMINATOR, 0).unwrap();
        assert_eq!(split.platform, 0);
        assert_eq!(split.royalty, 1_000);
        assert_eq!(split.remainder, 0);
    }

    #[test]
    fn test_royalty_floor_uses_fixed_rate_when_higher() {
        // 5% fixed vs 1000 bps/year over one hour: fixed wins
        let bps = reallocation_royalty_bps(500, 1_000, 3_600, 365 * 86_400).unwrap();
        assert_eq!(bps, 500);
    }

    #[test]
    fn test_royalty_floor_uses_prorated_tax_when_higher() {
        // 10000 bps per day, one-day minimum duration: prorated = 10000,
        // far above the 100 bps fixed royalty
        let bps = reallocation_royalty_bps(100, 10_000, 86_400, 86_400).unwrap();
        assert_eq!(bps, 10_000);
    }

    #[test]
    fn test_royalty_floor_caps_at_denominator() {
        let bps = reallocation_royalty_bps(100, 30_000, 86_400, 86_400).unwrap();
        assert_eq!(bps, FEE_DENOMINATOR);
    }
}
