use anchor_lang::prelude::*;
use crate::state::AllocationKind;

#[event]
pub struct AllocationStarted {
    pub asset_id: u64,
    pub kind: AllocationKind,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct BidPlaced {
    pub asset_id: u64,
    pub bidder: Pubkey,
    pub amount: u64,
    pub price_if_won: u64,
    pub end_time: i64,
}

#[event]
pub struct AllocationFinalized {
    pub asset_id: u64,
    pub winner: Option<Pubkey>,
    pub winning_bid: u64,
    pub beneficiary: Pubkey,
    pub royalty_paid: u64,
}
