use crate::{constants::*, error::HarbergerError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetWithdrawalAddress<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [ASSET_SEED.as_bytes(), &asset.id.to_le_bytes()],
        bump
    )]
    pub asset: Account<'info, Asset>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerAccount>,
}

impl<'info> SetWithdrawalAddress<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SetWithdrawalAddress>, withdrawal_address: Option<Pubkey>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    ctx.accounts.ledger.withdrawal_address = withdrawal_address;

    Ok(())
}
