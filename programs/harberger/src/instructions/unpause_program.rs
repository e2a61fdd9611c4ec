use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UnpauseProgram<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UnpauseProgram<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            HarbergerError::Unauthorized
        );

        require!(
            self.config.status == ProgramStatus::Paused,
            HarbergerError::AlreadyActive
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<UnpauseProgram>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    ctx.accounts.config.status = ProgramStatus::Active;

    emit!(ProgramUnpaused {
        admin: ctx.accounts.signer.key(),
    });

    Ok(())
}
