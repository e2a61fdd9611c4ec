use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetMinimumPrice<'info> {
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

impl<'info> SetMinimumPrice<'info> {
    pub fn validate(&self, minimum_price: u64, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.signer.key() == self.asset.creator,
            HarbergerError::NotCreator
        );

        require!(
            self.asset.is_creator_controlled(now),
            HarbergerError::CreatorControlRequired
        );

        require!(
            minimum_price <= MAXIMUM_PRICE,
            HarbergerError::PriceAboveMaximum
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SetMinimumPrice>, minimum_price: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(minimum_price, now)?;

    let asset = &mut ctx.accounts.asset;
    asset.minimum_price = minimum_price;

    emit!(MinimumPriceUpdated {
        asset_id: asset.id,
        minimum_price,
    });

    Ok(())
}
