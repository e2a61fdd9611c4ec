use crate::{constants::*, error::HarbergerError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct FinalizePurchase<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [ASSET_SEED.as_bytes(), &asset.id.to_le_bytes()],
        bump
    )]
    pub asset: Account<'info, Asset>,

    #[account(mut)]
    pub keeper_ledger: Account<'info, LedgerAccount>,

    #[account(mut)]
    pub creator_ledger: Account<'info, LedgerAccount>,

    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + LedgerAccount::INIT_SPACE,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), config.treasury.as_ref()],
        bump
    )]
    pub treasury_ledger: Account<'info, LedgerAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> FinalizePurchase<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        let asset = &self.asset;

        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(asset.is_keeper_held(), HarbergerError::NotKeeperHeld);

        require!(asset.order.is_standing(), HarbergerError::NoPurchaseOrder);

        // the reservation converts once the asset opens up again
        require!(asset.is_invokable(now), HarbergerError::NotInvokable);

        require!(
            now <= asset.order.expires_at(asset.invocation.invocation_period),
            HarbergerError::PurchaseOrderExpired
        );

        let keeper = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;
        self.keeper_ledger.assert_entry(asset.key(), keeper)?;
        self.creator_ledger.assert_entry(asset.key(), asset.creator)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<FinalizePurchase>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset_key = ctx.accounts.asset.key();
    let asset = &mut ctx.accounts.asset;
    let order = asset.order.clone();
    let purchaser = order.purchaser.ok_or(HarbergerError::NoPurchaseOrder)?;
    let seller = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;

    ctx.accounts.treasury_ledger.ensure_initialized(
        asset_key,
        ctx.accounts.config.treasury,
        ctx.bumps.treasury_ledger,
    );

    asset.settle_into(
        now,
        &mut ctx.accounts.keeper_ledger.funds,
        &mut ctx.accounts.creator_ledger.earnings,
    )?;

    // the order's locked-in payment is split like a royalty-bearing sale;
    // escalations after locking never change what this purchaser pays
    asset.release_escrow(order.locked_amount)?;

    let split = split_proceeds(
        order.locked_amount,
        asset.purchase_royalty_bps as u64,
        ctx.accounts.config.platform_fee_bps as u64,
    )?;

    ctx.accounts.treasury_ledger.credit_earnings(split.platform)?;
    ctx.accounts.creator_ledger.credit_earnings(split.royalty)?;
    ctx.accounts.keeper_ledger.credit_earnings(split.remainder)?;

    asset.transfer_to(purchaser, order.reserved_price)?;
    asset.order.clear();

    emit!(PurchaseOrderFinalized {
        asset_id: asset.id,
        purchaser,
        seller,
        locked_amount: order.locked_amount,
        reserved_price: order.reserved_price,
    });

    Ok(())
}
