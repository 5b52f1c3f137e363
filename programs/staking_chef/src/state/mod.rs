//! State structures for the Staking Chef program.
//!
//! `Chef` heads the pool registry, `Pool` holds one pool's configuration and
//! fee accumulator, and `UserDeposit` is one depositor's position in a pool.

pub mod chef;
pub mod pool;
pub mod user_deposit;

pub use chef::*;
pub use pool::*;
pub use user_deposit::*;
