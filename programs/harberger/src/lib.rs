#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod harberger {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        token_mint: Pubkey,
        treasury: Pubkey,
        pledge_authority: Pubkey,
        platform_fee_bps: u16,
    ) -> Result<()> {
        initialize::handler(ctx, token_mint, treasury, pledge_authority, platform_fee_bps)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        new_treasury: Option<Pubkey>,
        new_pledge_authority: Option<Pubkey>,
        new_platform_fee_bps: Option<u16>,
    ) -> Result<()> {
        update_config::handler(
            ctx,
            new_admin,
            new_treasury,
            new_pledge_authority,
            new_platform_fee_bps,
        )
    }

    pub fn pause_program(ctx: Context<PauseProgram>) -> Result<()> {
        pause_program::handler(ctx)
    }

    pub fn unpause_program(ctx: Context<UnpauseProgram>) -> Result<()> {
        unpause_program::handler(ctx)
    }

    pub fn create_asset(
        ctx: Context<CreateAsset>,
        tax_rate_bps: u16,
        tax_period_secs: i64,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
        minimum_price: u64,
        invocation_period: i64,
        response_period: i64,
        settings: AllocationSettings,
    ) -> Result<()> {
        create_asset::handler(
            ctx,
            tax_rate_bps,
            tax_period_secs,
            purchase_royalty_bps,
            reallocation_royalty_bps,
            minimum_price,
            invocation_period,
            response_period,
            settings,
        )
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }

    pub fn withdraw_all(ctx: Context<Withdraw>) -> Result<()> {
        withdraw::handler_all(ctx)
    }

    pub fn set_withdrawal_address(
        ctx: Context<SetWithdrawalAddress>,
        withdrawal_address: Option<Pubkey>,
    ) -> Result<()> {
        set_withdrawal_address::handler(ctx, withdrawal_address)
    }

    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        settle::handler(ctx)
    }

    pub fn set_price(ctx: Context<SetPrice>, new_price: u64) -> Result<()> {
        set_price::handler(ctx, new_price)
    }

    pub fn list_for_sale(ctx: Context<ListForSale>, price: u64) -> Result<()> {
        list_for_sale::handler(ctx, price)
    }

    pub fn purchase(
        ctx: Context<Purchase>,
        new_price: u64,
        current_price: u64,
        tax_rate_bps: u16,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
        invocation_period: i64,
        pledged_until: i64,
    ) -> Result<()> {
        purchase::handler(
            ctx,
            new_price,
            current_price,
            tax_rate_bps,
            purchase_royalty_bps,
            reallocation_royalty_bps,
            invocation_period,
            pledged_until,
        )
    }

    pub fn place_purchase_order(
        ctx: Context<PlacePurchaseOrder>,
        price_if_finalized: u64,
        current_price: u64,
        tax_rate_bps: u16,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
        invocation_period: i64,
        pledged_until: i64,
    ) -> Result<()> {
        place_purchase_order::handler(
            ctx,
            price_if_finalized,
            current_price,
            tax_rate_bps,
            purchase_royalty_bps,
            reallocation_royalty_bps,
            invocation_period,
            pledged_until,
        )
    }

    pub fn finalize_purchase(ctx: Context<FinalizePurchase>) -> Result<()> {
        finalize_purchase::handler(ctx)
    }

    pub fn cancel_purchase(ctx: Context<CancelPurchase>) -> Result<()> {
        cancel_purchase::handler(ctx)
    }

    pub fn relinquish(ctx: Context<Relinquish>, with_auction: bool) -> Result<()> {
        relinquish::handler(ctx, with_auction)
    }

    pub fn foreclose(ctx: Context<Foreclose>) -> Result<()> {
        foreclose::handler(ctx)
    }

    pub fn recall(ctx: Context<Recall>) -> Result<()> {
        recall::handler(ctx)
    }

    pub fn transfer_asset(ctx: Context<TransferAsset>, recipient: Pubkey) -> Result<()> {
        transfer_asset::handler(ctx, recipient)
    }

    pub fn start_allocation(ctx: Context<StartAllocation>) -> Result<()> {
        start_allocation::handler(ctx)
    }

    pub fn bid(ctx: Context<Bid>, amount: u64, price_if_won: u64) -> Result<()> {
        bid::handler(ctx, amount, price_if_won)
    }

    pub fn finalize_allocation(ctx: Context<FinalizeAllocation>) -> Result<()> {
        finalize_allocation::handler(ctx)
    }

    pub fn set_fees(
        ctx: Context<SetFees>,
        tax_rate_bps: u16,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
    ) -> Result<()> {
        set_fees::handler(ctx, tax_rate_bps, purchase_royalty_bps, reallocation_royalty_bps)
    }

    pub fn set_minimum_price(ctx: Context<SetMinimumPrice>, minimum_price: u64) -> Result<()> {
        set_minimum_price::handler(ctx, minimum_price)
    }

    pub fn set_allocation_settings(
        ctx: Context<SetAllocationSettings>,
        settings: AllocationSettings,
    ) -> Result<()> {
        set_allocation_settings::handler(ctx, settings)
    }

    pub fn record_invocation(ctx: Context<RecordInvocation>) -> Result<()> {
        record_invocation::handler(ctx)
    }

    pub fn record_response(ctx: Context<RecordResponse>) -> Result<()> {
        record_response::handler(ctx)
    }

    pub fn set_pledge(ctx: Context<SetPledge>, pledged_until: i64, claimable: bool) -> Result<()> {
        set_pledge::handler(ctx, pledged_until, claimable)
    }
}
