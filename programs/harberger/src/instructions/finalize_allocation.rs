use crate::{constants::*, error::HarbergerError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct FinalizeAllocation<'info> {
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

    /// Required when a winning bid is being settled.
    #[account(mut)]
    pub creator_ledger: Option<Account<'info, LedgerAccount>>,

    /// Required when the auction beneficiary is not the creator.
    #[account(mut)]
    pub beneficiary_ledger: Option<Account<'info, LedgerAccount>>,

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

impl<'info> FinalizeAllocation<'info> {
    pub fn validate(&self, now: i64) -> Result<()> {
        let asset = &self.asset;
        let allocation = &asset.allocation;

        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(allocation.exists(), HarbergerError::AllocationNotStarted);

        require!(
            now >= allocation.end_time,
            HarbergerError::AllocationStillRunning
        );

        if allocation.leading_bidder.is_some() {
            let creator_ledger = self
                .creator_ledger
                .as_ref()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            creator_ledger.assert_entry(asset.key(), asset.creator)?;

            if allocation.beneficiary != asset.creator {
                let beneficiary_ledger = self
                    .beneficiary_ledger
                    .as_ref()
                    .ok_or(HarbergerError::MissingLedgerAccount)?;
                beneficiary_ledger.assert_entry(asset.key(), allocation.beneficiary)?;
            }
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<FinalizeAllocation>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(now)?;

    let asset_key = ctx.accounts.asset.key();
    let asset = &mut ctx.accounts.asset;
    let allocation = asset.allocation.clone();

    let Some(winner) = allocation.leading_bidder else {
        // no bids: the allocation dissolves and the asset stays unowned
        asset.allocation.clear();

        emit!(AllocationFinalized {
            asset_id: asset.id,
            winner: None,
            winning_bid: 0,
            beneficiary: allocation.beneficiary,
            royalty_paid: 0,
        });

        return Ok(());
    };

    ctx.accounts.treasury_ledger.ensure_initialized(
        asset_key,
        ctx.accounts.config.treasury,
        ctx.bumps.treasury_ledger,
    );

    let creator_ledger = ctx
        .accounts
        .creator_ledger
        .as_mut()
        .ok_or(HarbergerError::MissingLedgerAccount)?;

    asset.release_escrow(allocation.leading_bid)?;

    // reallocation proceeds go mostly to the departed keeper, with the
    // creator's cut floored by the tax a minimum-duration tenure would owe
    let to_creator = allocation.kind == AllocationKind::Creator
        || allocation.beneficiary == asset.creator;
    let royalty_bps = if to_creator {
        0
    } else {
        reallocation_royalty_bps(
            asset.reallocation_royalty_bps,
            asset.tax_rate_bps,
            asset.settings.keeper_minimum_duration,
            asset.tax_period_secs,
        )?
    };

    let split = split_proceeds(
        allocation.leading_bid,
        royalty_bps,
        ctx.accounts.config.platform_fee_bps as u64,
    )?;

    ctx.accounts.treasury_ledger.credit_earnings(split.platform)?;

    let royalty_paid = if to_creator {
        creator_ledger.credit_earnings(split.remainder)?;
        split.remainder
    } else {
        creator_ledger.credit_earnings(split.royalty)?;
        let beneficiary_ledger = ctx
            .accounts
            .beneficiary_ledger
            .as_mut()
            .ok_or(HarbergerError::MissingLedgerAccount)?;
        beneficiary_ledger.credit_earnings(split.remainder)?;
        split.royalty
    };

    // occupancy moves to the winner at their self-assessed reserve price
    asset.transfer_to(winner, allocation.reserve_price_if_won)?;
    asset.stamp_settlement(now);

    // a creator-run allocation charges the asset for its new keeper
    if allocation.kind == AllocationKind::Creator {
        asset.invocation.begin_cycle(now);
    }

    asset.allocation.clear();

    emit!(AllocationFinalized {
        asset_id: asset.id,
        winner: Some(winner),
        winning_bid: allocation.leading_bid,
        beneficiary: allocation.beneficiary,
        royalty_paid,
    });

    Ok(())
}
