use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetPledge<'info> {
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

impl<'info> SetPledge<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.signer.key() == self.config.pledge_authority,
            HarbergerError::NotPledgeAuthority
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SetPledge>, pledged_until: i64, claimable: bool) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let asset = &mut ctx.accounts.asset;
    asset.pledge.pledged_until = pledged_until;
    asset.pledge.claimable = claimable;

    emit!(PledgeUpdated {
        asset_id: asset.id,
        pledged_until,
        claimable,
    });

    Ok(())
}
