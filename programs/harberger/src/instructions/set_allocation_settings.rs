use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

use super::create_asset::validate_allocation_settings;

#[derive(Accounts)]
pub struct SetAllocationSettings<'info> {
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

impl<'info> SetAllocationSettings<'info> {
    pub fn validate(&self, settings: &AllocationSettings, now: i64) -> Result<()> {
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

        // a running allocation keeps the parameters it started under
        require!(
            !self.asset.allocation.exists(),
            HarbergerError::AllocationExists
        );

        validate_allocation_settings(settings)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<SetAllocationSettings>, settings: AllocationSettings) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(&settings, now)?;

    let asset = &mut ctx.accounts.asset;
    asset.settings = settings;

    emit!(AllocationSettingsUpdated { asset_id: asset.id });

    Ok(())
}
