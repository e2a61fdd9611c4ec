use crate::{constants::*, error::HarbergerError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
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
    pub buyer_ledger: Account<'info, LedgerAccount>,

    /// The current keeper's ledger (the creator's on a first sale).
    #[account(mut)]
    pub seller_ledger: Account<'info, LedgerAccount>,

    /// Required when the seller is not the creator (royalty-bearing sale).
    #[account(mut)]
    pub creator_ledger: Option<Account<'info, LedgerAccount>>,

    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + LedgerAccount::INIT_SPACE,
        seeds = [LEDGER_SEED.as_bytes(), asset.key().as_ref(), config.treasury.as_ref()],
        bump
    )]
    pub treasury_ledger: Account<'info, LedgerAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> Purchase<'info> {
    pub fn validate(
        &self,
        new_price: u64,
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

        let keeper = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;

        require!(keeper != self.signer.key(), HarbergerError::SelfPurchase);

        require!(!asset.allocation.exists(), HarbergerError::AllocationExists);

        // mid invocation cycle the ratchet is the only path in
        if asset.is_keeper_held() {
            require!(asset.is_invokable(now), HarbergerError::NotInvokable);
        }

        // settlement must have landed in a strictly earlier instant
        require!(
            asset.last_settlement_time < now,
            HarbergerError::SettlementTooRecent
        );

        // front-run protection: the buyer restates every economically
        // relevant parameter and the call dies on any mismatch
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

        asset.validate_price_bounds(new_price)?;

        require!(
            self.buyer_ledger.funds >= current_price,
            HarbergerError::InsufficientFunds
        );

        self.seller_ledger.assert_entry(asset.key(), keeper)?;

        if asset.is_keeper_held() {
            let creator_ledger = self
                .creator_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            creator_ledger.assert_entry(asset.key(), asset.creator)?;
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<Purchase>,
    new_price: u64,
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
        new_price,
        current_price,
        tax_rate_bps,
        purchase_royalty_bps,
        reallocation_royalty_bps,
        invocation_period,
        pledged_until,
        now,
    )?;

    let asset_key = ctx.accounts.asset.key();
    let asset = &mut ctx.accounts.asset;
    let buyer = ctx.accounts.signer.key();
    let seller = asset.keeper.ok_or(HarbergerError::NotKeeperHeld)?;
    let first_sale = seller == asset.creator;

    ctx.accounts.treasury_ledger.ensure_initialized(
        asset_key,
        ctx.accounts.config.treasury,
        ctx.bumps.treasury_ledger,
    );

    // settle the outgoing keeper before the sale price moves
    if first_sale {
        asset.stamp_settlement(now);
    } else {
        let creator_ledger = ctx
            .accounts
            .creator_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        asset.settle_into(
            now,
            &mut ctx.accounts.seller_ledger.funds,
            &mut creator_ledger.earnings,
        )?;
    }

    ctx.accounts.buyer_ledger.debit_funds(current_price)?;

    let royalty_bps = if first_sale {
        0
    } else {
        asset.purchase_royalty_bps as u64
    };
    let split = split_proceeds(
        current_price,
        royalty_bps,
        ctx.accounts.config.platform_fee_bps as u64,
    )?;

    ctx.accounts.treasury_ledger.credit_earnings(split.platform)?;
    if !first_sale {
        let creator_ledger = ctx
            .accounts
            .creator_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        creator_ledger.credit_earnings(split.royalty)?;
    }
    ctx.accounts.seller_ledger.credit_earnings(split.remainder)?;

    asset.transfer_to(buyer, new_price)?;

    // a first sale charges the asset: the new keeper may invoke immediately
    if first_sale {
        asset.invocation.begin_cycle(now);
    }

    emit!(Purchased {
        asset_id: asset.id,
        seller,
        buyer,
        price: current_price,
        new_price,
        first_sale,
    });

    Ok(())
}
