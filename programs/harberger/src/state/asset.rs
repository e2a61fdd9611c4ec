use crate::{constants::*, error::HarbergerError, state::*, utils::*};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Asset {
    // --- Identity ---
    pub id: u64,
    pub creator: Pubkey,
    pub vault: Pubkey,

    // --- Occupancy ---
    pub keeper: Option<Pubkey>, // None = unowned / contract-held.
    pub price: u64,             // Keeper's self-assessed price.
    pub minimum_price: u64,

    // --- Economics ---
    pub tax_rate_bps: u16,
    pub tax_period_secs: i64,
    pub purchase_royalty_bps: u16,
    pub reallocation_royalty_bps: u16,

    // --- Settlement ---
    pub last_settlement_time: i64, // Monotonically non-decreasing.
    pub escrow: u64,               // Auction bid + purchase-order lock-in.

    // --- Sub-state ---
    pub settings: AllocationSettings,
    pub allocation: Allocation,
    pub order: PurchaseOrder,
    pub invocation: InvocationTracker,
    pub pledge: Pledge,

    // --- Metadata ---
    pub created_at: i64,
    pub bump: u8,
}

impl Asset {
    pub fn is_unowned(&self) -> bool {
        self.keeper.is_none()
    }

    pub fn is_creator_held(&self) -> bool {
        self.keeper == Some(self.creator)
    }

    pub fn is_keeper_held(&self) -> bool {
        matches!(self.keeper, Some(keeper) if keeper != self.creator)
    }

    pub fn is_invokable(&self, now: i64) -> bool {
        self.is_keeper_held() && self.invocation.is_invokable(now)
    }

    /// Tax accrued since the last settlement, evaluated at `at` without
    /// mutating anything. The creator taxes themself, so anything short of
    /// third-party occupancy owes nothing.
    pub fn owed_at(&self, at: i64) -> Result<u64> {
        if !self.is_keeper_held() {
            return Ok(0);
        }
        let boundary = self.invocation.tax_pause_boundary(at);
        let elapsed = elapsed_since(self.last_settlement_time, boundary);
        owed_since(self.price, self.tax_rate_bps, self.tax_period_secs, elapsed)
    }

    pub fn is_solvent(&self, keeper_funds: u64, now: i64) -> Result<bool> {
        Ok(keeper_funds >= self.owed_at(now)?)
    }

    /// Whether the keeper's funds cover tax through `until` (used to gate
    /// purchase orders: the keeper must last until the next invokable moment).
    pub fn is_solvent_until(&self, keeper_funds: u64, until: i64) -> Result<bool> {
        Ok(keeper_funds >= self.owed_at(until)?)
    }

    /// Settlement engine. Moves accrued tax (capped at the keeper's funds)
    /// from the keeper's funds into the creator's earnings and stamps the
    /// settlement clock. Returns the amount moved. Calling twice in the same
    /// instant moves zero the second time.
    pub fn settle_into(
        &mut self,
        now: i64,
        keeper_funds: &mut u64,
        creator_earnings: &mut u64,
    ) -> Result<u64> {
        if !self.is_keeper_held() {
            self.stamp_settlement(now);
            return Ok(0);
        }

        let owed = self.owed_at(now)?;
        let transferable = owed.min(*keeper_funds);

        *keeper_funds = keeper_funds
            .checked_sub(transferable)
            .ok_or(HarbergerError::Underflow)?;
        *creator_earnings = creator_earnings
            .checked_add(transferable)
            .ok_or(HarbergerError::Overflow)?;

        self.stamp_settlement(now);
        Ok(transferable)
    }

    /// Clock-only settlement for the creator-held and unowned states.
    pub fn stamp_settlement(&mut self, now: i64) {
        self.last_settlement_time = self.last_settlement_time.max(now);
    }

    /// The single occupancy mutation point. Allocation and purchase-order
    /// code transfers occupancy through here, never by writing `keeper`.
    pub fn transfer_to(&mut self, new_keeper: Pubkey, new_price: u64) -> Result<()> {
        require!(new_price <= MAXIMUM_PRICE, HarbergerError::PriceAboveMaximum);
        self.keeper = Some(new_keeper);
        self.price = new_price;
        Ok(())
    }

    /// Exit half of the state machine: relinquish, foreclose and recall all
    /// end here with the asset unowned at price zero.
    pub fn clear_keeper(&mut self) {
        self.keeper = None;
        self.price = 0;
    }

    /// Recomputed on every call, never cached: parameter changes are open to
    /// the creator while the asset is unowned or creator-held, or while a
    /// keeper has left an invocation unanswered past its deadline with no
    /// pledge standing in the way.
    pub fn is_creator_controlled(&self, now: i64) -> bool {
        if self.is_unowned() || self.is_creator_held() {
            return true;
        }
        self.invocation.is_overdue(now) && !self.pledge.is_outstanding(now)
    }

    pub fn validate_price_bounds(&self, price: u64) -> Result<()> {
        require!(price <= MAXIMUM_PRICE, HarbergerError::PriceAboveMaximum);
        require!(price >= self.minimum_price, HarbergerError::PriceBelowMinimum);
        Ok(())
    }

    pub fn add_escrow(&mut self, amount: u64) -> Result<()> {
        self.escrow = self
            .escrow
            .checked_add(amount)
            .ok_or(HarbergerError::Overflow)?;
        Ok(())
    }

    pub fn release_escrow(&mut self, amount: u64) -> Result<()> {
        self.escrow = self
            .escrow
            .checked_sub(amount)
            .ok_or(HarbergerError::Underflow)?;
        Ok(())
    }

    /// Duration a reallocation (keeper-departure) auction runs for.
    pub fn reallocation_duration(&self) -> i64 {
        self.settings.keeper_minimum_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 365 * 86_400;

    fn creator() -> Pubkey {
        Pubkey::new_from_array([0xAA; 32])
    }

    fn keeper() -> Pubkey {
        Pubkey::new_from_array([0xBB; 32])
    }

    fn asset() -> Asset {
        Asset {
            id: 1,
            creator: creator(),
            vault: Pubkey::new_from_array([0xCC; 32]),
            keeper: None,
            price: 0,
            minimum_price: 0,
            tax_rate_bps: 1_000, // 10% per period
            tax_period_secs: YEAR,
            purchase_royalty_bps: 1_000,
            reallocation_royalty_bps: 500,
            last_settlement_time: 0,
            escrow: 0,
            settings: AllocationSettings {
                method: AllocationMethod::EnglishAuction,
                starting_price: 100,
                minimum_bid_step: 10,
                minimum_duration: 86_400,
                keeper_minimum_duration: 3_600,
                bid_extension: 300,
            },
            allocation: Allocation::default(),
            order: PurchaseOrder::default(),
            invocation: InvocationTracker {
                invocation_period: 7 * 86_400,
                response_period: 86_400,
                last_invocation_time: 0,
                awaiting_response: false,
                invocation_count: 0,
            },
            pledge: Pledge::default(),
            created_at: 0,
            bump: 255,
        }
    }

    fn held_asset(price: u64) -> Asset {
        let mut a = asset();
        a.keeper = Some(keeper());
        a.price = price;
        a
    }

    #[test]
    fn test_settlement_moves_accrued_tax() {
        let mut a = held_asset(100);
        let mut funds = 50;
        let mut earnings = 0;

        // 10% of a year at 10%/year on price 100 owes exactly 1
        let moved = a.settle_into(YEAR / 10, &mut funds, &mut earnings).unwrap();
        assert_eq!(moved, 1);
        assert_eq!(funds, 49);
        assert_eq!(earnings, 1);
        assert_eq!(a.last_settlement_time, YEAR / 10);
    }

    #[test]
    fn test_settlement_is_idempotent_within_one_instant() {
        let mut a = held_asset(1_000_000);
        let mut funds = 1_000_000;
        let mut earnings = 0;

        let first = a.settle_into(YEAR / 2, &mut funds, &mut earnings).unwrap();
        assert!(first > 0);
        let second = a.settle_into(YEAR / 2, &mut funds, &mut earnings).unwrap();
        assert_eq!(second, 0);
    }

    #[test]
    fn test_settlement_clock_is_monotonic() {
        let mut a = held_asset(100);
        let mut funds = 100;
        let mut earnings = 0;

        a.settle_into(5_000, &mut funds, &mut earnings).unwrap();
        a.settle_into(4_000, &mut funds, &mut earnings).unwrap();
        assert_eq!(a.last_settlement_time, 5_000);
    }

    #[test]
    fn test_settlement_drains_underfunded_keeper() {
        let mut a = held_asset(1_000_000);
        let mut funds = 7;
        let mut earnings = 0;

        // a full year at 10% owes 100_000, far beyond the 7 on deposit
        let moved = a.settle_into(YEAR, &mut funds, &mut earnings).unwrap();
        assert_eq!(moved, 7);
        assert_eq!(funds, 0);

        // immediately after settlement the keeper is either clean or drained
        assert!(a.owed_at(YEAR).unwrap() == 0 || funds == 0);
        assert!(!a.is_solvent(funds, YEAR + YEAR / 10).unwrap());
    }

    #[test]
    fn test_creator_held_settles_clock_only() {
        let mut a = asset();
        a.keeper = Some(creator());
        a.price = 1_000_000;
        let mut funds = 5;
        let mut earnings = 0;

        let moved = a.settle_into(10 * YEAR, &mut funds, &mut earnings).unwrap();
        assert_eq!(moved, 0);
        assert_eq!(funds, 5);
        assert_eq!(a.last_settlement_time, 10 * YEAR);
        assert!(a.is_solvent(0, 20 * YEAR).unwrap());
    }

    #[test]
    fn test_zero_price_never_forecloses() {
        let a = held_asset(0);
        assert_eq!(a.owed_at(100 * YEAR).unwrap(), 0);
        assert!(a.is_solvent(0, 100 * YEAR).unwrap());
    }

    #[test]
    fn test_overdue_invocation_freezes_tax() {
        let mut a = held_asset(1_000_000);
        a.invocation.record_invocation(0);
        let deadline = a.invocation.response_deadline();

        // owed stops growing once the response deadline passes
        let at_deadline = a.owed_at(deadline).unwrap();
        let much_later = a.owed_at(deadline + YEAR).unwrap();
        assert_eq!(at_deadline, much_later);
        assert!(at_deadline > 0);
    }

    #[test]
    fn test_frozen_window_is_never_taxed() {
        let mut a = held_asset(1_000_000);
        let mut funds = 1_000_000;
        let mut earnings = 0;

        a.invocation.record_invocation(0);
        let deadline = a.invocation.response_deadline();

        // settle long after the deadline: accrual capped at the deadline
        let first = a.settle_into(deadline + 500_000, &mut funds, &mut earnings).unwrap();
        assert_eq!(first, a.price / 10 * deadline as u64 / YEAR as u64);

        // still unresponded: a later settle moves nothing
        let second = a
            .settle_into(deadline + 900_000, &mut funds, &mut earnings)
            .unwrap();
        assert_eq!(second, 0);

        // response arrives; the window between deadline and response stays free
        a.invocation.record_response();
        let third = a
            .settle_into(deadline + 900_000, &mut funds, &mut earnings)
            .unwrap();
        assert_eq!(third, 0);
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut a = asset();
        assert!(a.is_unowned());

        a.transfer_to(creator(), 100).unwrap();
        assert!(a.is_creator_held());
        assert!(!a.is_keeper_held());

        a.transfer_to(keeper(), 250).unwrap();
        assert!(a.is_keeper_held());
        assert_eq!(a.price, 250);

        a.clear_keeper();
        assert!(a.is_unowned());
        assert_eq!(a.price, 0);
    }

    #[test]
    fn test_transfer_rejects_out_of_bounds_price() {
        let mut a = asset();
        assert!(a.transfer_to(keeper(), MAXIMUM_PRICE + 1).is_err());
    }

    #[test]
    fn test_creator_controlled_predicate() {
        let mut a = asset();
        assert!(a.is_creator_controlled(0));

        a.transfer_to(creator(), 100).unwrap();
        assert!(a.is_creator_controlled(0));

        a.transfer_to(keeper(), 100).unwrap();
        assert!(!a.is_creator_controlled(0));

        // an overdue unresponded invocation hands control back
        a.invocation.record_invocation(1_000);
        let overdue = a.invocation.response_deadline() + 1;
        assert!(a.is_creator_controlled(overdue));

        // unless a pledge stands in the way
        a.pledge.claimable = true;
        assert!(!a.is_creator_controlled(overdue));
        a.pledge.claimable = false;
        a.pledge.pledged_until = overdue + 5_000;
        assert!(!a.is_creator_controlled(overdue));
        assert!(a.is_creator_controlled(overdue + 5_001));
    }

    #[test]
    fn test_ledger_closure_across_settles_and_escrow() {
        // funds + earnings + escrow stays equal to everything deposited
        let mut a = held_asset(1_000_000);
        let mut keeper_funds: u64 = 300_000;
        let mut bidder_funds: u64 = 150_000;
        let mut creator_earnings: u64 = 0;
        let deposited = keeper_funds + bidder_funds;

        let closure = |a: &Asset, kf: u64, bf: u64, ce: u64| kf + bf + ce + a.escrow;
        assert_eq!(closure(&a, keeper_funds, bidder_funds, creator_earnings), deposited);

        a.settle_into(YEAR / 10, &mut keeper_funds, &mut creator_earnings)
            .unwrap();
        assert_eq!(closure(&a, keeper_funds, bidder_funds, creator_earnings), deposited);

        // a bid escrows bidder funds
        bidder_funds -= 50_000;
        a.add_escrow(50_000).unwrap();
        assert_eq!(closure(&a, keeper_funds, bidder_funds, creator_earnings), deposited);

        // the refund releases them
        a.release_escrow(50_000).unwrap();
        bidder_funds += 50_000;
        assert_eq!(closure(&a, keeper_funds, bidder_funds, creator_earnings), deposited);

        a.settle_into(YEAR / 2, &mut keeper_funds, &mut creator_earnings)
            .unwrap();
        assert_eq!(closure(&a, keeper_funds, bidder_funds, creator_earnings), deposited);
    }

    #[test]
    fn test_foreclosure_path_recovers_consistent_state() {
        let mut a = held_asset(100);
        let mut funds = 0u64;
        let mut earnings = 0u64;
        let departed = keeper();

        // zero balance with positive tax accrued: foreclosure-eligible
        let when = YEAR;
        assert!(!a.is_solvent(funds, when).unwrap());

        a.settle_into(when, &mut funds, &mut earnings).unwrap();
        a.clear_keeper();
        a.allocation.begin(
            AllocationKind::Reallocation,
            departed,
            when,
            a.reallocation_duration(),
        );

        assert!(a.is_unowned());
        assert_eq!(a.price, 0);
        assert_eq!(a.allocation.kind, AllocationKind::Reallocation);
        assert_eq!(a.allocation.beneficiary, departed);
        assert_eq!(a.allocation.end_time, when + a.settings.keeper_minimum_duration);
    }
}
