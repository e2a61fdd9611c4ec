use crate::error::HarbergerError;
use anchor_lang::prelude::*;

/// Per-(asset, address) balance entry. `funds` back taxes, bids, purchases
/// and orders; `earnings` hold settled proceeds and are withdraw-only.
#[account]
#[derive(InitSpace)]
pub struct LedgerAccount {
    // --- Identity ---
    pub asset: Pubkey, // The asset this entry belongs to.
    pub owner: Pubkey, // The address whose balances these are.

    // --- Balances ---
    pub funds: u64,    // Spendable deposits.
    pub earnings: u64, // Settled proceeds, pull-withdrawal only.

    // --- Routing ---
    pub withdrawal_address: Option<Pubkey>, // Redirect for pull-withdrawals.

    // --- Metadata ---
    pub bump: u8, // A bump seed for PDA.
}

impl LedgerAccount {
    /// Stamps identity fields the first time an `init_if_needed` account is
    /// touched. A freshly created account has a default owner.
    pub fn ensure_initialized(&mut self, asset: Pubkey, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.asset = asset;
            self.owner = owner;
            self.bump = bump;
        }
    }

    /// Guards handlers that accept ledger accounts without PDA constraints
    /// (optional or party-dependent entries).
    pub fn assert_entry(&self, asset: Pubkey, owner: Pubkey) -> Result<()> {
        require_keys_eq!(self.asset, asset, HarbergerError::LedgerAssetMismatch);
        require_keys_eq!(self.owner, owner, HarbergerError::LedgerOwnerMismatch);
        Ok(())
    }

    pub fn credit_funds(&mut self, amount: u64) -> Result<()> {
        self.funds = self
            .funds
            .checked_add(amount)
            .ok_or(HarbergerError::Overflow)?;
        Ok(())
    }

    pub fn debit_funds(&mut self, amount: u64) -> Result<()> {
        self.funds = self
            .funds
            .checked_sub(amount)
            .ok_or(HarbergerError::InsufficientFunds)?;
        Ok(())
    }

    pub fn credit_earnings(&mut self, amount: u64) -> Result<()> {
        self.earnings = self
            .earnings
            .checked_add(amount)
            .ok_or(HarbergerError::Overflow)?;
        Ok(())
    }
}
