use crate::{constants::*, error::HarbergerError};
use anchor_lang::prelude::*;

/// Payment required for a purchase order at escalation `index`:
/// `base * (multiplier_bps / FEE_DENOMINATOR)^index`, flooring after each
/// step. Index 0 is the un-escalated base.
pub fn escalated_price(base: u64, multiplier_bps: u64, index: u32) -> Result<u64> {
    let mut value = base as u128;

    for _ in 0..index {
        value = value
            .checked_mul(multiplier_bps as u128)
            .ok_or(HarbergerError::Overflow)?
            .checked_div(FEE_DENOMINATOR as u128)
            .ok_or(HarbergerError::Underflow)?;
    }

    u64::try_from(value).map_err(|_| HarbergerError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_base() {
        assert_eq!(escalated_price(100, ORDER_MULTIPLIER_BPS, 0).unwrap(), 100);
    }

    #[test]
    fn test_compounding_steps() {
        assert_eq!(escalated_price(100, ORDER_MULTIPLIER_BPS, 1).unwrap(), 120);
        assert_eq!(escalated_price(100, ORDER_MULTIPLIER_BPS, 2).unwrap(), 144);
        // 144 * 1.2 = 172.8, floored
        assert_eq!(escalated_price(100, ORDER_MULTIPLIER_BPS, 3).unwrap(), 172);
    }

    #[test]
    fn test_each_index_is_multiplier_times_previous() {
        let mut previous = escalated_price(1_000_000, ORDER_MULTIPLIER_BPS, 0).unwrap();
        for index in 1..20u32 {
            let current = escalated_price(1_000_000, ORDER_MULTIPLIER_BPS, index).unwrap();
            assert_eq!(
                current,
                previous * ORDER_MULTIPLIER_BPS / FEE_DENOMINATOR,
                "index {}",
                index
            );
            previous = current;
        }
    }

    #[test]
    fn test_runaway_escalation_overflows_cleanly() {
        assert!(escalated_price(MAXIMUM_PRICE, ORDER_MULTIPLIER_BPS, 1_000).is_err());
    }
}
