use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
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
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + LedgerAccount::INIT_SPACE,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), asset.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn validate(&self, amount: u64, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(amount > 0, HarbergerError::ZeroDeposit);

        // An insolvent keeper must be foreclosed, not topped up.
        if self.asset.keeper == Some(self.signer.key()) {
            require!(
                self.asset.is_solvent(self.ledger.funds, now)?,
                HarbergerError::KeeperInsolvent
            );
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(amount, now)?;

    let asset_key = ctx.accounts.asset.key();
    let ledger = &mut ctx.accounts.ledger;
    ledger.ensure_initialized(asset_key, ctx.accounts.signer.key(), ctx.bumps.ledger);
    ledger.credit_funds(amount)?;

    // transfer from depositor to the asset vault
    let transfer_accounts = Transfer {
        from: ctx.accounts.depositor_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    emit!(Deposited {
        asset_id: ctx.accounts.asset.id,
        depositor: ctx.accounts.signer.key(),
        amount,
    });

    Ok(())
}
