use crate::{constants::*, error::HarbergerError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Bid<'info> {
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
    pub bidder_ledger: Account<'info, LedgerAccount>,

    /// The outbid leader's ledger; required when someone else is leading.
    #[account(mut)]
    pub previous_bidder_ledger: Option<Account<'info, LedgerAccount>>,
}

impl<'info> Bid<'info> {
    pub fn validate(&self, amount: u64, price_if_won: u64, now: i64) -> Result<()> {
        let asset = &self.asset;
        let allocation = &asset.allocation;

        require!(
            self.config.status == ProgramStatus::Active,
            HarbergerError::ProgramPaused
        );

        require!(allocation.exists(), HarbergerError::AllocationNotStarted);

        require!(
            allocation.is_accepting_bids(now),
            HarbergerError::AllocationClosed
        );

        allocation.validate_bid(&asset.settings, amount)?;

        asset.validate_price_bounds(price_if_won)?;

        match allocation.leading_bidder {
            Some(leader) if leader == self.signer.key() => {
                // raising one's own bid frees the standing escrow first
                require!(
                    self.previous_bidder_ledger.is_none(),
                    HarbergerError::LedgerOwnerMismatch
                );
                let available = self
                    .bidder_ledger
                    .funds
                    .checked_add(allocation.leading_bid)
                    .ok_or(HarbergerError::Overflow)?;
                require!(available >= amount, HarbergerError::InsufficientFunds);
            }
            Some(leader) => {
                let previous = self
                    .previous_bidder_ledger
                    .as_ref()
                    .ok_or(HarbergerError::MissingLedgerAccount)?;
                previous.assert_entry(asset.key(), leader)?;
                require!(
                    self.bidder_ledger.funds >= amount,
                    HarbergerError::InsufficientFunds
                );
            }
            None => {
                require!(
                    self.bidder_ledger.funds >= amount,
                    HarbergerError::InsufficientFunds
                );
            }
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<Bid>, amount: u64, price_if_won: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // validate
    ctx.accounts.validate(amount, price_if_won, now)?;

    let bidder = ctx.accounts.signer.key();
    let asset = &mut ctx.accounts.asset;
    let settings = asset.settings.clone();

    let outbid = asset
        .allocation
        .record_bid(bidder, amount, price_if_won, now, &settings);

    // refund the displaced escrow before taking the new one
    if let Some((previous_bidder, previous_amount)) = outbid {
        asset.release_escrow(previous_amount)?;
        if previous_bidder == bidder {
            ctx.accounts.bidder_ledger.credit_funds(previous_amount)?;
        } else {
            let previous_ledger = ctx
                .accounts
                .previous_bidder_ledger
                .as_mut()
                .ok_or(HarbergerError::MissingLedgerAccount)?;
            previous_ledger.credit_funds(previous_amount)?;
        }
    }

    ctx.accounts.bidder_ledger.debit_funds(amount)?;
    asset.add_escrow(amount)?;

    emit!(BidPlaced {
        asset_id: asset.id,
        bidder,
        amount,
        price_if_won,
        end_time: asset.allocation.end_time,
    });

    Ok(())
}
