use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RecordInvocation<'info> {
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

impl<'info> RecordInvocation<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.asset.keeper == Some(self.signer.key()),
            HarbergerError::NotKeeper
        );

        require!(self.asset.is_invokable(now), HarbergerError::NotInvokable);

        Ok(())
    }
}

pub fn handler(ctx: Context<RecordInvocation>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset = &mut ctx.accounts.asset;
    asset.invocation.record_invocation(now);

    emit!(Invoked {
        asset_id: asset.id,
        keeper: ctx.accounts.signer.key(),
        invocation_id: asset.invocation.invocation_count,
        invoked_at: now,
    });

    Ok(())
}
