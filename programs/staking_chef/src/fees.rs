//! Deposit fee accounting.
//!
//! Fees stay in the pool vault and are tracked by `Pool::collected_fees`.
//! The deposit path credits it; only the owner's withdrawal debits it.

use anchor_lang::prelude::*;

use crate::error::ChefError;
use crate::events::WithdrewFees;
use crate::ports::StakingAssetPort;
use crate::state::{Chef, Pool};

/// Fee balance after crediting `fee`. The caller commits it once the
/// deposit's transfers have gone through.
pub fn credit(pool: &Pool, fee: u64) -> Result<u64> {
    pool.collected_fees
        .checked_add(fee)
        .ok_or_else(|| error!(ChefError::MathOverflow))
}

/// Sends `amount` of collected fees to `to`.
///
/// # Errors
/// - `Unauthorized` if `caller` is not the owner
/// - `InsufficientFees` if `amount` exceeds the collected fees
/// - `TransferFailed` if custody does not hold `amount`
pub fn withdraw_fees<A: StakingAssetPort>(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    to: &Pubkey,
    amount: u64,
    asset: &mut A,
) -> Result<WithdrewFees> {
    chef.assert_owner(caller)?;
    chef.assert_pool(pool.pool_id)?;

    let remaining = pool
        .collected_fees
        .checked_sub(amount)
        .ok_or(ChefError::InsufficientFees)?;
    require!(
        asset.balance_of(&pool.vault)? >= amount,
        ChefError::TransferFailed
    );

    asset.push_to(to, amount)?;
    pool.collected_fees = remaining;

    Ok(WithdrewFees {
        pool_id: pool.pool_id,
        amount,
    })
}
