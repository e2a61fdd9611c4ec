use crate::{constants::*, error::HarbergerError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PlacePurchaseOrder<'info> {
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
    pub purchaser_ledger: Account<'info, LedgerAccount>,

    /// The displaced purchaser's ledger; required while an order stands.
    #[account(mut)]
    pub previous_purchaser_ledger: Option<Account<'info, LedgerAccount>>,

    /// Read to prove the keeper stays funded until the next invokable moment.
    pub keeper_ledger: Account<'info, LedgerAccount>,
}

impl<'info> PlacePurchaseOrder<'info> {
    pub fn validate(
        &self,
        price_if_finalized: u64,
        current_price: u64,
        tax_rate_bps: u16,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
        invocation_period: i64,
        pledged_until: i64,
        now: i64,
    ) -> Result<()> {
        let asset = &self.asset;

        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(asset.is_keeper_held(), HarbergerError::NotKeeperHeld);

        let keeper = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;

        require!(keeper != self.signer.key(), HarbergerError::SelfPurchase);

        // orders exist for the window where instant purchase is closed
        require!(!asset.is_invokable(now), HarbergerError::AssetInvokable);

        require!(
            asset.order.purchaser != Some(self.signer.key()),
            HarbergerError::SelfEscalation
        );

        // front-run protection, same surface as a direct purchase
        require!(asset.price == current_price, HarbergerError::StalePrice);
        require!(asset.tax_rate_bps == tax_rate_bps, HarbergerError::StaleTaxRate);
        require!(
            asset.purchase_royalty_bps == purchase_royalty_bps,
            HarbergerError::StaleRoyalty
        );
        require!(
            asset.reallocation_royalty_bps == reallocation_royalty_bps,
            HarbergerError::StaleRoyalty
        );
        require!(
            asset.invocation.invocation_period == invocation_period,
            HarbergerError::StaleInvocationPeriod
        );
        require!(
            asset.pledge.pledged_until == pledged_until,
            HarbergerError::StalePledge
        );

        asset.validate_price_bounds(price_if_finalized)?;

        // the reservation only makes sense if the keeper will still be
        // there when the asset opens up again
        self.keeper_ledger.assert_entry(asset.key(), keeper)?;
        require!(
            asset.is_solvent_until(
                self.keeper_ledger.funds,
                asset.invocation.next_invokable_time()
            )?,
            HarbergerError::KeeperUnderfunded
        );

        let payment = escalated_price(
            asset.price,
            ORDER_MULTIPLIER_BPS,
            asset
                .order
                .index
                .checked_add(1)
                .ok_or(HarbergerError::Overflow)?,
        )?;
        require!(
            self.purchaser_ledger.funds >= payment,
            HarbergerError::InsufficientFunds
        );

        if let Some(previous) = asset.order.purchaser {
            let previous_ledger = self
                .previous_purchaser_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            previous_ledger.assert_entry(asset.key(), previous)?;
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<PlacePurchaseOrder>,
    price_if_finalized: u64,
    current_price: u64,
    tax_rate_bps: u16,
    purchase_royalty_bps: u16,
    reallocation_royalty_bps: u16,
    invocation_period: i64,
    pledged_until: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(
        price_if_finalized,
        current_price,
        tax_rate_bps,
        purchase_royalty_bps,
        reallocation_royalty_bps,
        invocation_period,
        pledged_until,
        now,
    )?;

    let asset = &mut ctx.accounts.asset;
    let purchaser = ctx.accounts.signer.key();

    let payment = escalated_price(
        asset.price,
        ORDER_MULTIPLIER_BPS,
        asset
            .order
            .index
            .checked_add(1)
            .ok_or(HarbergerError::Overflow)?,
    )?;

    let displaced = asset
        .order
        .escalate(purchaser, payment, price_if_finalized, now);

    // the displaced escrow becomes immediately withdrawable earnings
    if let Some((previous_purchaser, previous_amount)) = displaced {
        asset.release_escrow(previous_amount)?;
        let previous_ledger = ctx
            .accounts
            .previous_purchaser_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        previous_ledger.credit_earnings(previous_amount)?;
    }

    ctx.accounts.purchaser_ledger.debit_funds(payment)?;
    asset.add_escrow(payment)?;

    emit!(PurchaseOrderPlaced {
        asset_id: asset.id,
        purchaser,
        index: asset.order.index,
        payment,
        reserved_price: price_if_finalized,
        displaced_purchaser: displaced.map(|(previous, _)| previous),
    });

    Ok(())
}
