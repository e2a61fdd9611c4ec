#![allow(ambiguous_glob_reexports)]

pub mod bid;
pub mod cancel_purchase;
pub mod create_asset;
pub mod deposit;
pub mod finalize_allocation;
pub mod finalize_purchase;
pub mod foreclose;
pub mod initialize;
pub mod list_for_sale;
pub mod pause_program;
pub mod place_purchase_order;
pub mod purchase;
pub mod recall;
pub mod record_invocation;
pub mod record_response;
pub mod relinquish;
pub mod set_allocation_settings;
pub mod set_fees;
pub mod set_minimum_price;
pub mod set_pledge;
pub mod set_price;
pub mod set_withdrawal_address;
pub mod settle;
pub mod start_allocation;
pub mod transfer_asset;
pub mod unpause_program;
pub mod update_config;
pub mod withdraw;

pub use bid::*;
pub use cancel_purchase::*;
pub use create_asset::*;
pub use deposit::*;
pub use finalize_allocation::*;
pub use finalize_purchase::*;
pub use foreclose::*;
pub use initialize::*;
pub use list_for_sale::*;
pub use pause_program::*;
pub use place_purchase_order::*;
pub use purchase::*;
pub use recall::*;
pub use record_invocation::*;
pub use record_response::*;
pub use relinquish::*;
pub use set_allocation_settings::*;
pub use set_fees::*;
pub use set_minimum_price::*;
pub use set_pledge::*;
pub use set_price::*;
pub use set_withdrawal_address::*;
pub use settle::*;
pub use start_allocation::*;
pub use transfer_asset::*;
pub use unpause_program::*;
pub use update_config::*;
pub use withdraw::*;
