pub mod allocation;
pub mod asset;
pub mod config;
pub mod invocation;
pub mod ledger;
pub mod pledge;
pub mod purchase_order;

pub use allocation::*;
pub use asset::*;
pub use config::*;
pub use invocation::*;
pub use ledger::*;
pub use pledge::*;
pub use purchase_order::*;
