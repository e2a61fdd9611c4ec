use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PauseProgram<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> PauseProgram<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            HarbergerError::Unauthorized
        );

        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::AlreadyPaused
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<PauseProgram>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    ctx.accounts.config.status = ProgramStatus::Paused;

    emit!(ProgramPaused {
        admin: ctx.accounts.signer.key(),
    });

    Ok(())
}
