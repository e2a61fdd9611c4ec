use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Foreclose<'info> {
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

    #[account(mut)]
    pub creator_ledger: Account<'info, LedgerAccount>,
}

impl<'info> Foreclose<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(self.asset.is_keeper_held(), HarbergerError::NotKeeperHeld);

        let keeper = self.asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;
        self.keeper_ledger.assert_entry(self.asset.key(), keeper)?;
        self.creator_ledger
            .assert_entry(self.asset.key(), self.asset.creator)?;

        // anyone may foreclose, but only on an insolvent keeper
        require!(
            !self.asset.is_solvent(self.keeper_ledger.funds, now)?,
            HarbergerError::KeeperSolvent
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<Foreclose>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset = &mut ctx.accounts.asset;
    let keeper = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;

    // drains whatever funds remain toward the accrued tax
    asset.settle_into(
        now,
        &mut ctx.accounts.keeper_ledger.funds,
        &mut ctx.accounts.creator_ledger.earnings,
    )?;

    asset.clear_keeper();

    // the departed keeper is the beneficiary of the reallocation
    let duration = asset.reallocation_duration();
    asset
        .allocation
        .begin(AllocationKind::Reallocation, keeper, now, duration);

    emit!(AllocationStarted {
        asset_id: asset.id,
        kind: AllocationKind::Reallocation,
        beneficiary: keeper,
        start_time: now,
        end_time: asset.allocation.end_time,
    });

    emit!(Foreclosed {
        asset_id: asset.id,
        keeper,
        caller: ctx.accounts.signer.key(),
    });

    Ok(())
}
