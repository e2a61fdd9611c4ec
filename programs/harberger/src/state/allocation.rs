use crate::error::HarbergerError;
use anchor_lang::prelude::*;

/// Enum for who an allocation pays out to
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub enum AllocationKind {
    None,
    Creator,      // Started by the creator; proceeds to the creator.
    Reallocation, // Started by a departing keeper; proceeds mostly to them.
}

/// Enum for the allocation strategy
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, InitSpace)]
pub enum AllocationMethod {
    EnglishAuction,
    FixedPriceListing,
}

/// Creator-controlled parameters shared by every allocation of an asset.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct AllocationSettings {
    pub method: AllocationMethod,
    pub starting_price: u64,
    pub minimum_bid_step: u64,
    pub minimum_duration: i64,        // Creator-started allocations.
    pub keeper_minimum_duration: i64, // Reallocation after relinquish/foreclose.
    pub bid_extension: i64,           // Sliding anti-snipe window.
}

/// A single running allocation. `end_time != 0` means an instance exists;
/// bids are accepted while `now < end_time`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct Allocation {
    pub kind: AllocationKind,
    pub start_time: i64,
    pub end_time: i64,
    pub leading_bidder: Option<Pubkey>,
    pub leading_bid: u64,
    pub reserve_price_if_won: u64, // The winner's self-assessed price.
    pub beneficiary: Pubkey,       // Creator, or the departed keeper.
}

impl Default for Allocation {
    fn default() -> Self {
        Self {
            kind: AllocationKind::None,
            start_time: 0,
            end_time: 0,
            leading_bidder: None,
            leading_bid: 0,
            reserve_price_if_won: 0,
            beneficiary: Pubkey::default(),
        }
    }
}

impl Allocation {
    pub fn exists(&self) -> bool {
        self.end_time != 0
    }

    pub fn is_accepting_bids(&self, now: i64) -> bool {
        self.exists() && now < self.end_time
    }

    pub fn begin(&mut self, kind: AllocationKind, beneficiary: Pubkey, now: i64, duration: i64) {
        self.kind = kind;
        self.start_time = now;
        self.end_time = now.saturating_add(duration);
        self.leading_bidder = None;
        self.leading_bid = 0;
        self.reserve_price_if_won = 0;
        self.beneficiary = beneficiary;
    }

    /// Smallest bid the current state accepts under the given settings.
    pub fn minimum_acceptable_bid(&self, settings: &AllocationSettings) -> Result<u64> {
        match self.leading_bidder {
            None => Ok(settings.starting_price),
            Some(_) => self
                .leading_bid
                .checked_add(settings.minimum_bid_step)
                .ok_or(HarbergerError::Overflow.into()),
        }
    }

    /// Validates `amount` against the strategy's acceptance rule.
    pub fn validate_bid(&self, settings: &AllocationSettings, amount: u64) -> Result<()> {
        match settings.method {
            AllocationMethod::EnglishAuction => {
                require!(
                    amount >= self.minimum_acceptable_bid(settings)?,
                    HarbergerError::BidBelowMinimum
                );
            }
            AllocationMethod::FixedPriceListing => {
                require!(
                    self.leading_bidder.is_none(),
                    HarbergerError::AllocationClosed
                );
                require!(
                    amount == settings.starting_price,
                    HarbergerError::BidNotAskingPrice
                );
            }
        }
        Ok(())
    }

    /// Records a new leading bid and returns the outbid (bidder, amount), if
    /// any, for refunding. English auctions slide `end_time` forward when the
    /// bid lands inside the extension window; fixed-price listings close
    /// immediately on their single accepted bid. The end time never moves
    /// backward past a bidder.
    pub fn record_bid(
        &mut self,
        bidder: Pubkey,
        amount: u64,
        price_if_won: u64,
        now: i64,
        settings: &AllocationSettings,
    ) -> Option<(Pubkey, u64)> {
        let outbid = self.leading_bidder.map(|previous| (previous, self.leading_bid));

        self.leading_bidder = Some(bidder);
        self.leading_bid = amount;
        self.reserve_price_if_won = price_if_won;

        match settings.method {
            AllocationMethod::EnglishAuction => {
                let extended = now.saturating_add(settings.bid_extension);
                if extended > self.end_time {
                    self.end_time = extended;
                }
            }
            AllocationMethod::FixedPriceListing => {
                self.end_time = now;
            }
        }

        outbid
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AllocationSettings {
        AllocationSettings {
            method: AllocationMethod::EnglishAuction,
            starting_price: 100,
            minimum_bid_step: 10,
            minimum_duration: 86_400,
            keeper_minimum_duration: 3_600,
            bid_extension: 300,
        }
    }

    fn bidder(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn test_first_bid_must_meet_starting_price() {
        let mut allocation = Allocation::default();
        allocation.begin(AllocationKind::Creator, bidder(1), 0, 86_400);

        assert!(allocation.validate_bid(&settings(), 99).is_err());
        assert!(allocation.validate_bid(&settings(), 100).is_ok());
    }

    #[test]
    fn test_bids_ratchet_by_minimum_step() {
        let s = settings();
        let mut allocation = Allocation::default();
        allocation.begin(AllocationKind::Creator, bidder(1), 0, 86_400);

        allocation.record_bid(bidder(2), 100, 500, 10, &s);
        assert!(allocation.validate_bid(&s, 109).is_err());
        assert!(allocation.validate_bid(&s, 110).is_ok());

        allocation.record_bid(bidder(3), 110, 500, 20, &s);
        assert_eq!(allocation.minimum_acceptable_bid(&s).unwrap(), 120);
    }

    #[test]
    fn test_anti_snipe_extends_but_never_shortens() {
        let s = settings();
        let mut allocation = Allocation::default();
        allocation.begin(AllocationKind::Creator, bidder(1), 0, s.minimum_duration);
        assert_eq!(allocation.end_time, 86_400);

        // well before the window: no extension
        allocation.record_bid(bidder(2), 100, 500, 86_000, &s);
        assert_eq!(allocation.end_time, 86_400);

        // inside the window: slides to now + extension
        allocation.record_bid(bidder(3), 110, 500, 86_300, &s);
        assert_eq!(allocation.end_time, 86_600);
    }

    #[test]
    fn test_outbid_bidder_is_returned_for_refund() {
        let s = settings();
        let mut allocation = Allocation::default();
        allocation.begin(AllocationKind::Creator, bidder(1), 0, 86_400);

        assert_eq!(allocation.record_bid(bidder(2), 100, 500, 10, &s), None);
        let outbid = allocation.record_bid(bidder(3), 120, 600, 20, &s);
        assert_eq!(outbid, Some((bidder(2), 100)));
    }

    #[test]
    fn test_fixed_price_listing_closes_on_accepted_ask() {
        let mut s = settings();
        s.method = AllocationMethod::FixedPriceListing;

        let mut allocation = Allocation::default();
        allocation.begin(AllocationKind::Creator, bidder(1), 0, 86_400);

        assert!(allocation.validate_bid(&s, 120).is_err());
        assert!(allocation.validate_bid(&s, 100).is_ok());

        allocation.record_bid(bidder(2), 100, 500, 50, &s);
        assert!(!allocation.is_accepting_bids(51));
        assert!(allocation.validate_bid(&s, 100).is_err());
    }
}
