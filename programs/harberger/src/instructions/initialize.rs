use crate::{constants::*, error::HarbergerError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn validate(&self, platform_fee_bps: u16) -> Result<()> {
        require!(
            platform_fee_bps <= MAX_PLATFORM_FEE_BPS,
            HarbergerError::InvalidPlatformFee
        );

        Ok(())
    }
}

pub fn handler(
    ctx: Context<Initialize>,
    token_mint: Pubkey,
    treasury: Pubkey,
    pledge_authority: Pubkey,
    platform_fee_bps: u16,
) -> Result<()> {
    // validate
    ctx.accounts.validate(platform_fee_bps)?;

    let config = &mut ctx.accounts.config;

    // set fields
    config.admin = ctx.accounts.signer.key();
    config.pledge_authority = pledge_authority;
    config.token_mint = token_mint;
    config.treasury = treasury;
    config.platform_fee_bps = platform_fee_bps;
    config.status = ProgramStatus::Active;
    config.asset_counter = 0;
    config.version = 0;
    config.bump = ctx.bumps.config;

    Ok(())
}
