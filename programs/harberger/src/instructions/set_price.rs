use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetPrice<'info> {
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

impl<'info> SetPrice<'info> {
    pub fn validate(&self, new_price: u64, now: i64) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.asset.keeper == Some(self.signer.key()),
            HarbergerError::NotKeeper
        );

        self.asset.validate_price_bounds(new_price)?;

        // Repricing is for funded keepers; the insolvent get foreclosed.
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

pub fn handler(ctx: Context<SetPrice>, new_price: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(new_price, now)?;

    let asset = &mut ctx.accounts.asset;

    // settle at the old price before the new one takes effect
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

    let old_price = asset.price;
    asset.price = new_price;

    emit!(PriceUpdated {
        asset_id: asset.id,
        keeper: ctx.accounts.signer.key(),
        old_price,
        new_price,
    });

    Ok(())
}
