use crate::constants::*;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    // --- Authorities ---
    pub admin: Pubkey,            // The administrator of the program.
    pub pledge_authority: Pubkey, // Collateral-custody collaborator allowed to manage pledges.

    // --- Token & Treasury ---
    pub token_mint: Pubkey, // The token all asset vaults are denominated in.
    pub treasury: Pubkey,   // The address whose ledger earnings receive platform fees.

    // --- Fee Config ---
    pub platform_fee_bps: u16, // Platform cut of every sale and auction, in bps.

    // --- Global State ---
    pub status: ProgramStatus, // Overall program status (Active / Paused).
    pub asset_counter: u64,    // Incremental counter for new asset IDs.

    // --- Metadata ---
    pub version: u8, // The version of the config account.
    pub bump: u8,    // A bump seed for PDA.
}
