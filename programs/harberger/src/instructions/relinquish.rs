use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Relinquish<'info> {
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
    pub keeper_ledger: Account<'info, LedgerAccount>,

    /// Required while the asset is keeper-held.
    #[account(mut)]
    pub creator_ledger: Option<Account<'info, LedgerAccount>>,
}

impl<'info> Relinquish<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.asset.keeper == Some(self.signer.key()),
            HarbergerError::NotKeeper
        );

        require!(
            self.asset.is_solvent(self.keeper_ledger.funds, now)?,
            HarbergerError::KeeperInsolvent
        );

        if self.asset.is_keeper_held() {
            let creator_ledger = self
                .creator_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            creator_ledger.assert_entry(self.asset.key(), self.asset.creator)?;
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<Relinquish>, with_auction: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset = &mut ctx.accounts.asset;
    let keeper = ctx.accounts.signer.key();

    if asset.is_keeper_held() {
        let creator_ledger = ctx
            .accounts
            .creator_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        asset.settle_into(
            now,
            &mut ctx.accounts.keeper_ledger.funds,
            &mut creator_ledger.earnings,
        )?;
    } else {
        asset.stamp_settlement(now);
    }

    asset.clear_keeper();

    if with_auction {
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
    }

    emit!(Relinquished {
        asset_id: asset.id,
        keeper,
        with_auction,
    });

    Ok(())
}
