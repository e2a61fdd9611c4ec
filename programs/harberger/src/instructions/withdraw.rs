use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerAccount>,

    /// Creator's ledger; required when the signer is a taxed keeper so the
    /// withdrawal settles first.
    #[account(mut)]
    pub creator_ledger: Option<Account<'info, LedgerAccount>>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), asset.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Withdraw<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        // Pull-withdrawals honor the registered redirect.
        let expected_destination = self
            .ledger
            .withdrawal_address
            .unwrap_or(self.signer.key());
        require!(
            self.destination.owner == expected_destination,
            HarbergerError::InvalidWithdrawalDestination
        );

        if self.asset.keeper == Some(self.signer.key()) && self.asset.is_keeper_held() {
            let creator_ledger = self
                .creator_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            creator_ledger.assert_entry(self.asset.key(), self.asset.creator)?;
        }

        Ok(())
    }
}

/// Settles the keeper's tax when the withdrawing party is the keeper, then
/// returns the amount moved. Shared by `withdraw` and `withdraw_all`.
fn settle_if_keeper(ctx: &mut Context<Withdraw>, now: i64) -> Result<u64> {
    let asset = &mut ctx.accounts.asset;
    if asset.keeper != Some(ctx.accounts.signer.key()) {
        // a bystander withdrawing their own funds does not touch the clock
        return Ok(0);
    }

    if asset.is_keeper_held() {
        let creator_ledger = ctx
            .accounts
            .creator_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        let ledger = &mut ctx.accounts.ledger;
        asset.settle_into(now, &mut ledger.funds, &mut creator_ledger.earnings)
    } else {
        asset.stamp_settlement(now);
        Ok(0)
    }
}

fn transfer_out(ctx: &Context<Withdraw>, amount: u64) -> Result<()> {
    let asset = &ctx.accounts.asset;
    let transfer_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.destination.to_account_info(),
        authority: asset.to_account_info(),
    };
    let asset_id = asset.id;
    let asset_bump = asset.bump;
    let seeds = &[
        ASSET_SEED.as_bytes(),
        &asset_id.to_le_bytes(),
        &[asset_bump],
    ];
    let signer = &[&seeds[..]];
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
        signer,
    );
    transfer(transfer_ctx, amount)
}

pub fn handler(mut ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let now = Clock::get()?.unix_timestamp;
    settle_if_keeper(&mut ctx, now)?;

    ctx.accounts.ledger.debit_funds(amount)?;
    transfer_out(&ctx, amount)?;

    emit!(Withdrawn {
        asset_id: ctx.accounts.asset.id,
        owner: ctx.accounts.signer.key(),
        destination: ctx.accounts.destination.key(),
        amount,
    });

    Ok(())
}

pub fn handler_all(mut ctx: Context<Withdraw>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let now = Clock::get()?.unix_timestamp;
    settle_if_keeper(&mut ctx, now)?;

    let ledger = &mut ctx.accounts.ledger;
    let amount = ledger
        .funds
        .checked_add(ledger.earnings)
        .ok_or(HarbergerError::Overflow)?;
    require!(amount > 0, HarbergerError::InsufficientFunds);

    ledger.funds = 0;
    ledger.earnings = 0;
    transfer_out(&ctx, amount)?;

    emit!(Withdrawn {
        asset_id: ctx.accounts.asset.id,
        owner: ctx.accounts.signer.key(),
        destination: ctx.accounts.destination.key(),
        amount,
    });

    Ok(())
}
