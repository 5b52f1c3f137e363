//! # Staking Chef Program
//!
//! A multi-pool, time-locked staking program. An owner registers pools,
//! each accepting one staking token; depositors lock that token for a
//! configurable time and accrue reward minted from a single reward token.
//!
//! ## Features
//! - Reward linear in stake and slots elapsed:
//!   `amount * reward_per_block * blocks / amount_per_reward`
//! - Per-pool deposit fee (per mille), minimum opening deposit and lock time
//! - Harvest without withdrawing, settle on top-up and withdrawal
//! - Emergency withdrawal that ignores the lock and forfeits reward
//! - Pool closing with a final rewarded slot
//! - Collected fees withdrawable by the owner
//!
//! ## Layout
//! The accounting engine (`registry`, `ledger`, `fees`, `reward`) is plain
//! Rust over the account structs and talks to the token program only through
//! the traits in `ports`. Instruction handlers sample the clock once, wire the
//! SPL adapters and emit the events the engine returns.

use anchor_lang::prelude::*;

declare_id!("ALAyZnuHx7WDyggQK9KyLcV1N8pg8a1yazyW3CGEaiUF");

pub mod checkpoint;
pub mod constants;
pub mod error;
pub mod events;
pub mod fees;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod ports;
pub mod registry;
pub mod reward;
pub mod state;

use instructions::*;
use registry::PoolParams;

#[program]
pub mod staking_chef {
    use super::*;

    /// Creates the chef for a reward mint. The caller becomes the owner.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the owner, chef and reward mint
    ///
    /// # Errors
    /// Returns an error if a chef already exists for the reward mint.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Registers a new pool at the next pool id.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the chef, new pool and its vault
    /// * `params` - Reward rate, deposit fee, minimum deposit and lock time
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - Deposit fee exceeds 1000 per mille
    /// - Amount per reward is zero
    /// - Lock time is negative
    pub fn create_pool(ctx: Context<CreatePool>, params: PoolParams) -> Result<()> {
        instructions::create_pool::handler(ctx, params)
    }

    /// Owner function to set the staked amount that earns one reward unit
    /// per `reward_per_block`.
    ///
    /// # Errors
    /// Returns an error if caller is not the owner, the pool does not exist
    /// or the value is zero.
    pub fn set_amount_per_reward(
        ctx: Context<AdminPool>,
        pool_id: u64,
        amount_per_reward: u64,
    ) -> Result<()> {
        instructions::admin::set_amount_per_reward_handler(ctx, pool_id, amount_per_reward)
    }

    /// Owner function to set the reward emitted per slot.
    ///
    /// # Errors
    /// Returns an error if caller is not the owner or the pool does not exist.
    pub fn set_reward_per_block(
        ctx: Context<AdminPool>,
        pool_id: u64,
        reward_per_block: u64,
    ) -> Result<()> {
        instructions::admin::set_reward_per_block_handler(ctx, pool_id, reward_per_block)
    }

    /// Owner function to set the deposit fee.
    ///
    /// # Arguments
    /// * `ctx` - The context containing owner accounts
    /// * `pool_id` - Pool to update
    /// * `deposit_fee_per_mille` - New fee (per mille, e.g., 2 = 0.2%)
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - Fee exceeds 1000 per mille
    pub fn set_deposit_fee(
        ctx: Context<AdminPool>,
        pool_id: u64,
        deposit_fee_per_mille: u16,
    ) -> Result<()> {
        instructions::admin::set_deposit_fee_handler(ctx, pool_id, deposit_fee_per_mille)
    }

    /// Owner function to set the minimum opening deposit.
    pub fn set_minimum_deposit(
        ctx: Context<AdminPool>,
        pool_id: u64,
        minimum_deposit: u64,
    ) -> Result<()> {
        instructions::admin::set_minimum_deposit_handler(ctx, pool_id, minimum_deposit)
    }

    /// Owner function to set the lock applied by future deposits.
    ///
    /// Existing locks are not changed.
    ///
    /// # Errors
    /// Returns an error if caller is not the owner or the lock is negative.
    pub fn set_lock_time(
        ctx: Context<AdminPool>,
        pool_id: u64,
        lock_duration_seconds: i64,
    ) -> Result<()> {
        instructions::admin::set_lock_time_handler(ctx, pool_id, lock_duration_seconds)
    }

    /// Owner function to stop reward accrual after `last_rewarded_block`.
    ///
    /// # Arguments
    /// * `ctx` - The context containing owner accounts
    /// * `pool_id` - Pool to close
    /// * `last_rewarded_block` - Final slot that earns reward
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - Pool is already closed
    /// - `last_rewarded_block` is not after the current slot
    pub fn close_pool(
        ctx: Context<AdminPool>,
        pool_id: u64,
        last_rewarded_block: u64,
    ) -> Result<()> {
        instructions::admin::close_pool_handler(ctx, pool_id, last_rewarded_block)
    }

    /// Owner function to send collected deposit fees to `to`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - Amount exceeds collected fees
    /// - Custody cannot cover the transfer
    pub fn withdraw_fees(
        ctx: Context<WithdrawFees>,
        pool_id: u64,
        to: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::withdraw_fees::handler(ctx, pool_id, to, amount)
    }

    /// Deposits staking tokens into a pool and resets the caller's lock.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for depositing
    /// * `pool_id` - Target pool
    /// * `amount` - Gross amount; the deposit fee is cut from it
    ///
    /// # Errors
    /// Returns an error if:
    /// - Pool does not exist
    /// - Opening deposit is below the pool minimum
    /// - Token transfer fails
    pub fn deposit(ctx: Context<Deposit>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, pool_id, amount)
    }

    /// Withdraws staking tokens after the lock ends, settling reward.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Lock has not ended
    /// - Amount exceeds the deposited balance
    pub fn withdraw(ctx: Context<Withdraw>, pool_id: u64, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, pool_id, amount)
    }

    /// Withdraws staking tokens ignoring the lock. Pending reward is lost.
    ///
    /// # Errors
    /// Returns an error if amount exceeds the deposited balance.
    pub fn emergency_withdraw(
        ctx: Context<EmergencyWithdraw>,
        pool_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx, pool_id, amount)
    }

    /// Mints pending reward without withdrawing.
    ///
    /// # Errors
    /// Returns an error if the chef is not the reward mint authority.
    pub fn harvest(ctx: Context<Harvest>, pool_id: u64) -> Result<()> {
        instructions::harvest::handler(ctx, pool_id)
    }

    /// Returns the reward `depositor` would harvest at the current slot.
    pub fn pending_reward(
        ctx: Context<PendingReward>,
        pool_id: u64,
        depositor: Pubkey,
    ) -> Result<u64> {
        instructions::views::pending_reward_handler(ctx, pool_id, depositor)
    }

    /// Returns the number of pools created so far.
    pub fn pool_count(ctx: Context<PoolCount>) -> Result<u64> {
        instructions::views::pool_count_handler(ctx)
    }
}
