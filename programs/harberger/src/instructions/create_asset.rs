use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct CreateAsset<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Asset::INIT_SPACE,
        seeds = [ASSET_SEED.as_bytes(), &config.asset_counter.to_le_bytes()],
        bump
    )]
    pub asset: Account<'info, Asset>,

    #[account(
        init,
        payer = signer,
        seeds = [VAULT_SEED.as_bytes(), asset.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = asset,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateAsset<'info> {
    pub fn validate(
        &self,
        tax_rate_bps: u16,
        tax_period_secs: i64,
        purchase_royalty_bps: u16,
        reallocation_royalty_bps: u16,
        minimum_price: u64,
        invocation_period: i64,
        response_period: i64,
        settings: &AllocationSettings,
    ) -> Result<()> {
        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(tax_rate_bps <= MAX_TAX_RATE_BPS, HarbergerError::InvalidTaxRate);

        require!(tax_period_secs > 0, HarbergerError::InvalidTaxPeriod);

        require!(
            purchase_royalty_bps as u64 <= FEE_DENOMINATOR,
            HarbergerError::InvalidRoyalty
        );

        require!(
            reallocation_royalty_bps as u64 <= FEE_DENOMINATOR,
            HarbergerError::InvalidRoyalty
        );

        require!(minimum_price <= MAXIMUM_PRICE, HarbergerError::PriceAboveMaximum);

        require!(
            invocation_period > 0 && response_period > 0,
            HarbergerError::InvalidInvocationPeriod
        );

        validate_allocation_settings(settings)?;

        Ok(())
    }
}

pub fn validate_allocation_settings(settings: &AllocationSettings) -> Result<()> {
    require!(
        settings.minimum_duration > 0 && settings.keeper_minimum_duration > 0,
        HarbergerError::InvalidDuration
    );

    require!(settings.bid_extension >= 0, HarbergerError::InvalidDuration);

    require!(settings.minimum_bid_step > 0, HarbergerError::InvalidBidStep);

    require!(
        settings.starting_price <= MAXIMUM_PRICE,
        HarbergerError::PriceAboveMaximum
    );

    Ok(())
}

pub fn handler(
    ctx: Context<CreateAsset>,
    tax_rate_bps: u16,
    tax_period_secs: i64,
    purchase_royalty_bps: u16,
    reallocation_royalty_bps: u16,
    minimum_price: u64,
    invocation_period: i64,
    response_period: i64,
    settings: AllocationSettings,
) -> Result<()> {
    // validate
    ctx.accounts.validate(
        tax_rate_bps,
        tax_period_secs,
        purchase_royalty_bps,
        reallocation_royalty_bps,
        minimum_price,
        invocation_period,
        response_period,
        &settings,
    )?;

    let config = &mut ctx.accounts.config;
    let asset = &mut ctx.accounts.asset;
    let now = Clock::get()?.unix_timestamp;

    // set fields
    asset.id = config.asset_counter;
    asset.creator = ctx.accounts.signer.key();
    asset.vault = ctx.accounts.vault.key();
    asset.keeper = None;
    asset.price = 0;
    asset.minimum_price = minimum_price;
    asset.tax_rate_bps = tax_rate_bps;
    asset.tax_period_secs = tax_period_secs;
    asset.purchase_royalty_bps = purchase_royalty_bps;
    asset.reallocation_royalty_bps = reallocation_royalty_bps;
    asset.last_settlement_time = now;
    asset.escrow = 0;
    asset.settings = settings;
    asset.allocation = Allocation::default();
    asset.order = PurchaseOrder::default();
    asset.invocation = InvocationTracker {
        invocation_period,
        response_period,
        last_invocation_time: 0,
        awaiting_response: false,
        invocation_count: 0,
    };
    asset.pledge = Pledge::default();
    asset.created_at = now;
    asset.bump = ctx.bumps.asset;

    // advance the asset counter
    config.asset_counter = config
        .asset_counter
        .checked_add(1)
        .ok_or(HarbergerError::Overflow)?;

    emit!(AssetCreated {
        asset_id: asset.id,
        creator: asset.creator,
        tax_rate_bps,
        tax_period_secs,
    });

    Ok(())
}
