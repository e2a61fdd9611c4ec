use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Recall<'info> {
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

    #[account(mut)]
    pub keeper_ledger: Account<'info, LedgerAccount>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub creator_ledger: Account<'info, LedgerAccount>,
}

impl<'info> Recall<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.signer.key() == self.asset.creator,
            HarbergerError::NotCreator
        );

        require!(self.asset.is_keeper_held(), HarbergerError::NotKeeperHeld);

        // a recall needs an invocation left unanswered past its deadline
        require!(
            self.asset.invocation.is_overdue(now),
            HarbergerError::InvocationNotOverdue
        );

        // and no pledge standing in the way
        require!(
            !self.asset.pledge.is_outstanding(now),
            HarbergerError::PledgeOutstanding
        );

        let keeper = self.asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;
        self.keeper_ledger.assert_entry(self.asset.key(), keeper)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<Recall>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset = &mut ctx.accounts.asset;
    let keeper = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;

    asset.settle_into(
        now,
        &mut ctx.accounts.keeper_ledger.funds,
        &mut ctx.accounts.creator_ledger.earnings,
    )?;

    asset.clear_keeper();

    emit!(Recalled {
        asset_id: asset.id,
        keeper,
        creator: ctx.accounts.signer.key(),
    });

    Ok(())
}
