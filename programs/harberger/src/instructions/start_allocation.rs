use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct StartAllocation<'info> {
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

impl<'info> StartAllocation<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.signer.key() == self.asset.creator,
            HarbergerError::NotCreator
        );

        require!(self.asset.is_unowned(), HarbergerError::NotUnowned);

        require!(
            !self.asset.allocation.exists(),
            HarbergerError::AllocationExists
        );

        require!(
            !self.asset.invocation.has_unresponded(),
            HarbergerError::InvocationPending
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<StartAllocation>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let asset = &mut ctx.accounts.asset;
    let now = Clock::get()?.unix_timestamp;
    let creator = asset.creator;
    let duration = asset.settings.minimum_duration;

    asset
        .allocation
        .begin(AllocationKind::Creator, creator, now, duration);

    emit!(AllocationStarted {
        asset_id: asset.id,
        kind: AllocationKind::Creator,
        beneficiary: creator,
        start_time: now,
        end_time: asset.allocation.end_time,
    });

    Ok(())
}
