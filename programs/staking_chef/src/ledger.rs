//! Deposit ledger.
//!
//! Drives every depositor-facing state transition on one `(pool, depositor)`
//! record. Each operation validates and computes the new record first, then
//! calls the asset and mint ports, and only then writes the record back, so
//! a rejected transfer or mint leaves both pool and record untouched.

use anchor_lang::prelude::*;

use crate::checkpoint::Checkpoint;
use crate::error::ChefError;
use crate::events::{Deposited, Harvested, Withdrew};
use crate::fees;
use crate::ports::{RewardMintPort, StakingAssetPort};
use crate::reward;
use crate::state::{Chef, Pool, UserDeposit};

/// Result of a deposit: the fee split, reward settled on the way in, and
/// the event to emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositOutcome {
    pub fee: u64,
    pub net: u64,
    pub reward: u64,
    pub event: Deposited,
}

/// Result of an ordinary withdrawal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawOutcome {
    pub reward: u64,
    pub event: Withdrew,
}

/// One pool, pinned to the block and time sampled for the current
/// instruction.
pub struct DepositLedger<'a> {
    pool: &'a mut Pool,
    now: Checkpoint,
}

impl<'a> DepositLedger<'a> {
    /// # Errors
    /// `PoolNotFound` if the pool was never created by `chef`.
    pub fn open(chef: &Chef, pool: &'a mut Pool, now: Checkpoint) -> Result<Self> {
        chef.assert_pool(pool.pool_id)?;
        Ok(Self { pool, now })
    }

    pub fn pool(&self) -> &Pool {
        self.pool
    }

    /// Read-only reward query at the sampled block.
    pub fn pending_reward(&self, position: &UserDeposit) -> Result<u64> {
        reward::pending_reward(position, self.pool, self.now.block)
    }

    /// Stakes `gross` into the pool.
    ///
    /// Opening a position requires `gross >= minimum_deposit`; top-ups do
    /// not. The fee is cut from `gross` and credited to the pool. An
    /// existing balance has its pending reward minted first. The lock is
    /// reset to `now + lock_duration_seconds`, never extended.
    pub fn deposit<A, M>(
        &mut self,
        position: &mut UserDeposit,
        depositor: &Pubkey,
        gross: u64,
        asset: &mut A,
        minter: &mut M,
    ) -> Result<DepositOutcome>
    where
        A: StakingAssetPort,
        M: RewardMintPort,
    {
        position.assert_owner(depositor)?;
        let pool = &*self.pool;
        let topping_up = position.amount > 0;

        if !topping_up {
            require!(
                gross >= pool.minimum_deposit,
                ChefError::BelowMinimumDeposit
            );
        }

        let split = reward::deposit_fee(gross, pool.deposit_fee_per_mille)?;
        let collected_fees = fees::credit(pool, split.fee)?;
        let pending = if topping_up {
            reward::pending_reward(position, pool, self.now.block)?
        } else {
            0
        };
        let amount = position
            .amount
            .checked_add(split.net)
            .ok_or(ChefError::MathOverflow)?;
        let lock_time_end = self
            .now
            .timestamp
            .checked_add(pool.lock_duration_seconds)
            .ok_or(ChefError::MathOverflow)?;

        asset.pull_from(depositor, gross)?;
        if topping_up {
            minter.mint(depositor, pending)?;
        }

        self.pool.collected_fees = collected_fees;
        position.amount = amount;
        position.reward_block_start = self.now.block;
        position.lock_time_end = lock_time_end;

        Ok(DepositOutcome {
            fee: split.fee,
            net: split.net,
            reward: pending,
            event: Deposited {
                pool_id: self.pool.pool_id,
                depositor: *depositor,
                amount: gross,
            },
        })
    }

    /// Unstakes `amount` once the lock has ended, settling reward first.
    ///
    /// # Errors
    /// - `LockActive` before `lock_time_end`
    /// - `InsufficientBalance` if `amount` exceeds the staked balance
    pub fn withdraw<A, M>(
        &mut self,
        position: &mut UserDeposit,
        depositor: &Pubkey,
        amount: u64,
        asset: &mut A,
        minter: &mut M,
    ) -> Result<WithdrawOutcome>
    where
        A: StakingAssetPort,
        M: RewardMintPort,
    {
        position.assert_owner(depositor)?;
        require!(
            position.is_lock_ended(self.now.timestamp),
            ChefError::LockActive
        );

        let remaining = position
            .amount
            .checked_sub(amount)
            .ok_or(ChefError::InsufficientBalance)?;
        let pending = reward::pending_reward(position, self.pool, self.now.block)?;

        minter.mint(depositor, pending)?;
        asset.push_to(depositor, amount)?;

        position.reward_block_start = self.now.block;
        position.amount = remaining;

        Ok(WithdrawOutcome {
            reward: pending,
            event: Withdrew {
                pool_id: self.pool.pool_id,
                depositor: *depositor,
                amount,
            },
        })
    }

    /// Unstakes `amount` regardless of the lock. Unsettled reward is
    /// forfeited and the checkpoint stays where it was.
    pub fn emergency_withdraw<A>(
        &mut self,
        position: &mut UserDeposit,
        depositor: &Pubkey,
        amount: u64,
        asset: &mut A,
    ) -> Result<Withdrew>
    where
        A: StakingAssetPort,
    {
        position.assert_owner(depositor)?;
        let remaining = position
            .amount
            .checked_sub(amount)
            .ok_or(ChefError::InsufficientBalance)?;

        asset.push_to(depositor, amount)?;
        position.amount = remaining;

        Ok(Withdrew {
            pool_id: self.pool.pool_id,
            depositor: *depositor,
            amount,
        })
    }

    /// Mints pending reward and moves the checkpoint to the current block,
    /// even when that is past the pool's close cap.
    pub fn harvest<M>(
        &mut self,
        position: &mut UserDeposit,
        depositor: &Pubkey,
        minter: &mut M,
    ) -> Result<Harvested>
    where
        M: RewardMintPort,
    {
        position.assert_owner(depositor)?;
        let pending = reward::pending_reward(position, self.pool, self.now.block)?;

        minter.mint(depositor, pending)?;
        position.reward_block_start = self.now.block;

        Ok(Harvested {
            pool_id: self.pool.pool_id,
            depositor: *depositor,
            amount: pending,
        })
    }
}
