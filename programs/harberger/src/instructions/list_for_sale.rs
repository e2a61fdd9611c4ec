use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ListForSale<'info> {
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
}

impl<'info> ListForSale<'info> {
    pub fn validate(&self, price: u64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.signer.key() == self.asset.creator,
            HarbergerError::NotCreator
        );

        require!(self.asset.is_unowned(), HarbergerError::AlreadyHeld);

        require!(
            !self.asset.allocation.exists(),
            HarbergerError::AllocationExists
        );

        require!(
            !self.asset.invocation.has_unresponded(),
            HarbergerError::InvocationPending
        );

        self.asset.validate_price_bounds(price)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<ListForSale>, price: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(price)?;

    let asset = &mut ctx.accounts.asset;
    let now = Clock::get()?.unix_timestamp;

    let creator = asset.creator;
    asset.transfer_to(creator, price)?;
    asset.stamp_settlement(now);

    emit!(Listed {
        asset_id: asset.id,
        creator: asset.creator,
        price,
    });

    Ok(())
}
