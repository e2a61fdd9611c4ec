use anchor_lang::prelude::*;

#[event]
pub struct ProgramPaused {
    pub admin: Pubkey,
}

#[event]
pub struct ProgramUnpaused {
    pub admin: Pubkey,
}

#[event]
pub struct FeesUpdated {
    pub asset_id: u64,
    pub tax_rate_bps: u16,
    pub purchase_royalty_bps: u16,
    pub reallocation_royalty_bps: u16,
}

#[event]
pub struct MinimumPriceUpdated {
    pub asset_id: u64,
    pub minimum_price: u64,
}

#[event]
pub struct AllocationSettingsUpdated {
    pub asset_id: u64,
}

#[event]
pub struct PledgeUpdated {
    pub asset_id: u64,
    pub pledged_until: i64,
    pub claimable: bool,
}

#[event]
pub struct Invoked {
    pub asset_id: u64,
    pub keeper: Pubkey,
    pub invocation_id: u64,
    pub invoked_at: i64,
}

#[event]
pub struct Responded {
    pub asset_id: u64,
    pub creator: Pubkey,
    pub responded_at: i64,
}
