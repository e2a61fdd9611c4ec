use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const ASSET_SEED: &str = "asset";
#[constant]
pub const VAULT_SEED: &str = "vault";
#[constant]
pub const LEDGER_SEED: &str = "ledger";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Denominator for all bps fractions (tax rate, royalties, platform fee).
pub const FEE_DENOMINATOR: u64 = 10_000;

/// Self-assessed prices are capped so every proportional computation fits
/// comfortably in u128 intermediates.
pub const MAXIMUM_PRICE: u64 = 1 << 53;

/// Platform fee is capped at 10%.
pub const MAX_PLATFORM_FEE_BPS: u16 = 1_000;

/// Tax rate is capped at 300% per tax period.
pub const MAX_TAX_RATE_BPS: u16 = 30_000;

/// Each purchase order must out-escalate the previous one by 1.2x,
/// compounding per escalation index.
pub const ORDER_MULTIPLIER_BPS: u64 = 12_000;

/// A purchase order expires this many invocation periods after placement.
pub const ORDER_EXPIRATION_PERIODS: i64 = 2;

/// Enum for program status flags
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, InitSpace)]
pub enum ProgramStatus {
    Active,
    Paused,
}
