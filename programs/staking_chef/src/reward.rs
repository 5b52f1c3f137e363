//! Reward accounting.
//!
//! Pure computations shared by the read-only pending reward query and the
//! settlement step of every mutating instruction. Nothing here touches
//! account state.
//!
//! Reward accrues linearly per block:
//! `reward = amount * reward_per_block * blocks_elapsed / amount_per_reward`
//! where `blocks_elapsed` stops at the pool's close cap, if any.

use anchor_lang::prelude::*;

use crate::constants::FEE_DENOMINATOR;
use crate::error::ChefError;
use crate::state::{Pool, UserDeposit};

/// Gross deposit split into the pool's fee cut and the net staked amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u64,
    pub net: u64,
}

/// Splits a gross deposit: `fee = floor(gross * per_mille / 1000)`.
pub fn deposit_fee(gross: u64, fee_per_mille: u16) -> Result<FeeSplit> {
    let fee = (gross as u128)
        .checked_mul(fee_per_mille as u128)
        .ok_or(ChefError::MathOverflow)?
        .checked_div(FEE_DENOMINATOR as u128)
        .ok_or(ChefError::MathOverflow)?;
    let fee = u64::try_from(fee).map_err(|_| ChefError::MathOverflow)?;
    let net = gross.checked_sub(fee).ok_or(ChefError::MathOverflow)?;

    Ok(FeeSplit { fee, net })
}

/// Highest block reward can be settled up to: the current block, or the
/// close cap when the pool is closed and the cap is already behind us.
pub fn settlement_end(pool: &Pool, current_block: u64) -> u64 {
    match pool.last_rewarded_block {
        Some(cap) => cap.min(current_block),
        None => current_block,
    }
}

/// Blocks eligible for reward since the deposit's checkpoint. Zero once the
/// checkpoint has reached or passed the settlement end.
pub fn blocks_elapsed(deposit: &UserDeposit, pool: &Pool, current_block: u64) -> u64 {
    settlement_end(pool, current_block).saturating_sub(deposit.reward_block_start)
}

/// Reward a position could settle at `current_block`.
///
/// # Errors
/// `MathOverflow` if the product does not fit in `u128` or the quotient
/// does not fit in `u64`; `ZeroAmountPerReward` on a pool with no divisor.
pub fn pending_reward(deposit: &UserDeposit, pool: &Pool, current_block: u64) -> Result<u64> {
    let blocks = blocks_elapsed(deposit, pool, current_block);
    if blocks == 0 || deposit.amount == 0 {
        return Ok(0);
    }

    require!(pool.amount_per_reward > 0, ChefError::ZeroAmountPerReward);

    let reward = (deposit.amount as u128)
        .checked_mul(pool.reward_per_block as u128)
        .ok_or(ChefError::MathOverflow)?
        .checked_mul(blocks as u128)
        .ok_or(ChefError::MathOverflow)?
        .checked_div(pool.amount_per_reward as u128)
        .ok_or(ChefError::MathOverflow)?;

    u64::try_from(reward).map_err(|_| error!(ChefError::MathOverflow))
}
