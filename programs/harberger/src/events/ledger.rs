use anchor_lang::prelude::*;

#[event]
pub struct Deposited {
    pub asset_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Withdrawn {
    pub asset_id: u64,
    pub owner: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Settled {
    pub asset_id: u64,
    pub keeper: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
    pub settled_at: i64,
}
