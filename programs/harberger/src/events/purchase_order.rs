use anchor_lang::prelude::*;

#[event]
pub struct PurchaseOrderPlaced {
    pub asset_id: u64,
    pub purchaser: Pubkey,
    pub index: u32,
    pub payment: u64,
    pub reserved_price: u64,
    pub displaced_purchaser: Option<Pubkey>,
}

#[event]
pub struct PurchaseOrderFinalized {
    pub asset_id: u64,
    pub purchaser: Pubkey,
    pub seller: Pubkey,
    pub locked_amount: u64,
    pub reserved_price: u64,
}

#[event]
pub struct PurchaseOrderCanceled {
    pub asset_id: u64,
    pub purchaser: Pubkey,
    pub caller: Pubkey,
    pub refunded: u64,
}
