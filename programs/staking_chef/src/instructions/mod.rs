//! Instruction handlers for the staking chef program.
//!
//! Each module pairs one Anchor accounts context with its handler.

pub mod admin;
pub mod create_pool;
pub mod deposit;
pub mod emergency_withdraw;
pub mod harvest;
pub mod initialize;
pub mod views;
pub mod withdraw;
pub mod withdraw_fees;

pub use admin::*;
pub use create_pool::*;
pub use deposit::*;
pub use emergency_withdraw::*;
pub use harvest::*;
pub use initialize::*;
pub use views::*;
pub use withdraw::*;
pub use withdraw_fees::*;
