use crate::{constants::*, error::HarbergerError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn validate(
        &self,
        new_admin: Option<Pubkey>,
        new_platform_fee_bps: Option<u16>,
    ) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            HarbergerError::Unauthorized
        );

        if let Some(new_admin) = new_admin {
            require!(new_admin != self.config.admin, HarbergerError::InvalidNewAdmin);
        }

        if let Some(new_platform_fee_bps) = new_platform_fee_bps {
            require!(
                new_platform_fee_bps <= MAX_PLATFORM_FEE_BPS,
                HarbergerError::InvalidPlatformFee
            );
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    new_admin: Option<Pubkey>,
    new_treasury: Option<Pubkey>,
    new_pledge_authority: Option<Pubkey>,
    new_platform_fee_bps: Option<u16>,
) -> Result<()> {
    // validate
    ctx.accounts.validate(new_admin, new_platform_fee_bps)?;

    let config = &mut ctx.accounts.config;

    // set fields
    if let Some(new_admin) = new_admin {
        config.admin = new_admin;
    }
    if let Some(new_treasury) = new_treasury {
        config.treasury = new_treasury;
    }
    if let Some(new_pledge_authority) = new_pledge_authority {
        config.pledge_authority = new_pledge_authority;
    }
    if let Some(new_platform_fee_bps) = new_platform_fee_bps {
        config.platform_fee_bps = new_platform_fee_bps;
    }

    // update config version
    config.version = config
        .version
        .checked_add(1)
        .ok_or(HarbergerError::Overflow)?;

    Ok(())
}
