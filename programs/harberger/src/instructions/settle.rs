use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Settle<'info> {
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

    /// Required while the asset is keeper-held.
    #[account(mut)]
    pub keeper_ledger: Option<Account<'info, LedgerAccount>>,

    /// Required while the asset is keeper-held.
    #[account(mut)]
    pub creator_ledger: Option<Account<'info, LedgerAccount>>,
}

impl<'info> Settle<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        if self.asset.is_keeper_held() {
            let keeper = self.asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;
            let keeper_ledger = self
                .keeper_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            keeper_ledger.assert_entry(self.asset.key(), keeper)?;

            let creator_ledger = self
                .creator_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            creator_ledger.assert_entry(self.asset.key(), self.asset.creator)?;
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<Settle>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let now = Clock::get()?.unix_timestamp;
    let asset = &mut ctx.accounts.asset;

    let amount = if asset.is_keeper_held() {
        let keeper_ledger = ctx
            .accounts
            .keeper_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        let creator_ledger = ctx
            .accounts
            .creator_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        asset.settle_into(now, &mut keeper_ledger.funds, &mut creator_ledger.earnings)?
    } else {
        asset.stamp_settlement(now);
        0
    };

    emit!(Settled {
        asset_id: asset.id,
        keeper: asset.keeper.unwrap_or_default(),
        creator: asset.creator,
        amount,
        settled_at: now,
    });

    Ok(())
}
