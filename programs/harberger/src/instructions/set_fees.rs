use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetFees<'info> {
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

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub creator_ledger: Account<'info, LedgerAccount>,
}

impl<'info> SetFees<'info> {
    pub fn validate(
        &self,
        tax_rate_bps: u16,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
        now: i64,
    ) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(
            self.signer.key() == self.asset.creator,
            HarbergerError::NotCreator
        );

        require!(
            self.asset.is_creator_controlled(now),
            HarbergerError::CreatorControlRequired
        );

        require!(tax_rate_bps <= MAX_TAX_RATE_BPS, HarbergerError::InvalidTaxRate);

        require!(
            purchase_royalty_bps as u64 <= FEE_DENOMINATOR,
            HarbergerError::InvalidRoyalty
        );

        require!(
            reallocation_royalty_bps as u64 <= FEE_DENOMINATOR,
            HarbergerError::InvalidRoyalty
        );

        if self.asset.is_keeper_held() {
            let keeper = self.asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;
            let keeper_ledger = self
                .keeper_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            keeper_ledger.assert_entry(self.asset.key(), keeper)?;
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<SetFees>,
    tax_rate_bps: u16,
    purchase_royalty_bps: u16,
    reallocation_royalty_bps: u16,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(
        tax_rate_bps,
        purchase_royalty_bps,
        reallocation_royalty_bps,
        now,
    )?;

    let asset = &mut ctx.accounts.asset;

    // everything accrued under the old rates settles under the old rates
    if asset.is_keeper_held() {
        let keeper_ledger = ctx
            .accounts
            .keeper_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        asset.settle_into(
            now,
            &mut keeper_ledger.funds,
            &mut ctx.accounts.creator_ledger.earnings,
        )?;
    } else {
        asset.stamp_settlement(now);
    }

    asset.tax_rate_bps = tax_rate_bps;
    asset.purchase_royalty_bps = purchase_royalty_bps;
    asset.reallocation_royalty_bps = reallocation_royalty_bps;

    emit!(FeesUpdated {
        asset_id: asset.id,
        tax_rate_bps,
        purchase_royalty_bps,
        reallocation_royalty_bps,
    });

    Ok(())
}
