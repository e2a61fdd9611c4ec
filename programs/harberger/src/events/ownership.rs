use anchor_lang::prelude::*;

#[event]
pub struct AssetCreated {
    pub asset_id: u64,
    pub creator: Pubkey,
    pub tax_rate_bps: u16,
    pub tax_period_secs: i64,
}

#[event]
pub struct Listed {
    pub asset_id: u64,
    pub creator: Pubkey,
    pub price: u64,
}

#[event]
pub struct PriceUpdated {
    pub asset_id: u64,
    pub keeper: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct Purchased {
    pub asset_id: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    pub new_price: u64,
    pub first_sale: bool,
}

#[event]
pub struct Transferred {
    pub asset_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub price: u64,
}

#[event]
pub struct Relinquished {
    pub asset_id: u64,
    pub keeper: Pubkey,
    pub with_auction: bool,
}

#[event]
pub struct Foreclosed {
    pub asset_id: u64,
    pub keeper: Pubkey,
    pub caller: Pubkey,
}

#[event]
pub struct Recalled {
    pub asset_id: u64,
    pub keeper: Pubkey,
    pub creator: Pubkey,
}
