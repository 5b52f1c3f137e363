//! Pool registry.
//!
//! Owner-gated creation and per-field administration of pools. Every entry
//! point checks the caller against `Chef::owner` and the pool id against
//! `Chef::pool_count` before touching the pool, then returns the event the
//! handler emits.

use anchor_lang::prelude::*;

use crate::constants::MAX_DEPOSIT_FEE_PER_MILLE;
use crate::error::ChefError;
use crate::events::{
    AmountPerRewardUpdated, DepositFeeUpdated, LockTimeUpdated, MinimumDepositUpdated,
    PoolClosed, PoolCreated, RewardPerBlockUpdated,
};
use crate::state::{Chef, Pool};

/// Configuration supplied when a pool is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub amount_per_reward: u64,
    pub reward_per_block: u64,
    pub deposit_fee_per_mille: u16,
    pub minimum_deposit: u64,
    pub lock_duration_seconds: i64,
}

impl PoolParams {
    pub fn validate(&self) -> Result<()> {
        validate_amount_per_reward(self.amount_per_reward)?;
        validate_deposit_fee(self.deposit_fee_per_mille)?;
        validate_lock_duration(self.lock_duration_seconds)
    }
}

/// Accounts a new pool is bound to for its whole life.
#[derive(Clone, Copy, Debug)]
pub struct PoolCustody {
    pub chef: Pubkey,
    pub staking_mint: Pubkey,
    pub vault: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

fn validate_amount_per_reward(amount_per_reward: u64) -> Result<()> {
    require!(amount_per_reward > 0, ChefError::ZeroAmountPerReward);
    Ok(())
}

fn validate_deposit_fee(deposit_fee_per_mille: u16) -> Result<()> {
    require!(
        deposit_fee_per_mille <= MAX_DEPOSIT_FEE_PER_MILLE,
        ChefError::DepositFeeTooHigh
    );
    Ok(())
}

fn validate_lock_duration(lock_duration_seconds: i64) -> Result<()> {
    require!(lock_duration_seconds >= 0, ChefError::NegativeLockDuration);
    Ok(())
}

fn authorize(chef: &Chef, caller: &Pubkey, pool: &Pool) -> Result<()> {
    chef.assert_owner(caller)?;
    chef.assert_pool(pool.pool_id)
}

/// Appends a pool at the next id. The pool starts open with no fees.
pub fn create_pool(
    chef: &mut Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    custody: PoolCustody,
    params: PoolParams,
) -> Result<PoolCreated> {
    chef.assert_owner(caller)?;
    params.validate()?;

    let pool_id = chef.next_pool_id()?;
    *pool = Pool {
        chef: custody.chef,
        pool_id,
        staking_mint: custody.staking_mint,
        vault: custody.vault,
        amount_per_reward: params.amount_per_reward,
        reward_per_block: params.reward_per_block,
        deposit_fee_per_mille: params.deposit_fee_per_mille,
        minimum_deposit: params.minimum_deposit,
        lock_duration_seconds: params.lock_duration_seconds,
        last_rewarded_block: None,
        collected_fees: 0,
        bump: custody.bump,
        vault_bump: custody.vault_bump,
    };

    Ok(PoolCreated {
        staking_mint: custody.staking_mint,
        pool_id,
        amount_per_reward: params.amount_per_reward,
        reward_per_block: params.reward_per_block,
        deposit_fee_per_mille: params.deposit_fee_per_mille,
        minimum_deposit: params.minimum_deposit,
        lock_duration_seconds: params.lock_duration_seconds,
    })
}

pub fn set_amount_per_reward(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    amount_per_reward: u64,
) -> Result<AmountPerRewardUpdated> {
    authorize(chef, caller, pool)?;
    validate_amount_per_reward(amount_per_reward)?;

    pool.amount_per_reward = amount_per_reward;
    Ok(AmountPerRewardUpdated {
        pool_id: pool.pool_id,
        amount_per_reward,
    })
}

/// Takes effect for every block not yet settled, including blocks already
/// elapsed since a position's last checkpoint.
pub fn set_reward_per_block(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    reward_per_block: u64,
) -> Result<RewardPerBlockUpdated> {
    authorize(chef, caller, pool)?;

    pool.reward_per_block = reward_per_block;
    Ok(RewardPerBlockUpdated {
        pool_id: pool.pool_id,
        reward_per_block,
    })
}

pub fn set_deposit_fee(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    deposit_fee_per_mille: u16,
) -> Result<DepositFeeUpdated> {
    authorize(chef, caller, pool)?;
    validate_deposit_fee(deposit_fee_per_mille)?;

    pool.deposit_fee_per_mille = deposit_fee_per_mille;
    Ok(DepositFeeUpdated {
        pool_id: pool.pool_id,
        deposit_fee_per_mille,
    })
}

pub fn set_minimum_deposit(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    minimum_deposit: u64,
) -> Result<MinimumDepositUpdated> {
    authorize(chef, caller, pool)?;

    pool.minimum_deposit = minimum_deposit;
    Ok(MinimumDepositUpdated {
        pool_id: pool.pool_id,
        minimum_deposit,
    })
}

/// Existing locks keep their end time; the new duration applies from the
/// next deposit.
pub fn set_lock_time(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    lock_duration_seconds: i64,
) -> Result<LockTimeUpdated> {
    authorize(chef, caller, pool)?;
    validate_lock_duration(lock_duration_seconds)?;

    pool.lock_duration_seconds = lock_duration_seconds;
    Ok(LockTimeUpdated {
        pool_id: pool.pool_id,
        lock_duration_seconds,
    })
}

/// Freezes reward accrual at `last_rewarded_block`. Deposits and
/// withdrawals keep working. A pool closes at most once.
pub fn close_pool(
    chef: &Chef,
    caller: &Pubkey,
    pool: &mut Pool,
    last_rewarded_block: u64,
    current_block: u64,
) -> Result<PoolClosed> {
    authorize(chef, caller, pool)?;
    require!(!pool.is_closed(), ChefError::PoolAlreadyClosed);
    require!(
        last_rewarded_block > current_block,
        ChefError::CloseBlockNotInFuture
    );

    pool.last_rewarded_block = Some(last_rewarded_block);
    Ok(PoolClosed {
        pool_id: pool.pool_id,
        last_rewarded_block,
    })
}
