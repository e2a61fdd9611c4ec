use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CancelPurchase<'info> {
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
    pub purchaser_ledger: Account<'info, LedgerAccount>,
}

impl<'info> CancelPurchase<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        let asset = &self.asset;

        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(asset.order.is_standing(), HarbergerError::NoPurchaseOrder);

        let purchaser = asset.order.purchaser.ok_or(HarbergerError::NoPurchaseOrder)?;
        self.purchaser_ledger.assert_entry(asset.key(), purchaser)?;

        // the custody collaborator may cancel at any time; anyone else only
        // once the order has expired with the asset still closed off
        if self.signer.key() != self.config.pledge_authority {
            require!(
                asset.order.is_expired(now, asset.invocation.invocation_period),
                HarbergerError::PurchaseOrderNotExpired
            );
            require!(!asset.is_invokable(now), HarbergerError::AssetInvokable);
            require!(!asset.pledge.claimable, HarbergerError::PledgeOutstanding);
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<CancelPurchase>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset = &mut ctx.accounts.asset;
    let purchaser = asset.order.purchaser.ok_or(HarbergerError::NoPurchaseOrder)?;
    let refunded = asset.order.locked_amount;

    asset.release_escrow(refunded)?;
    ctx.accounts.purchaser_ledger.credit_earnings(refunded)?;
    asset.order.clear();

    emit!(PurchaseOrderCanceled {
        asset_id: asset.id,
        purchaser,
        caller: ctx.accounts.signer.key(),
        refunded,
    });

    Ok(())
}
