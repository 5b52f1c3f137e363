/// Read-only instruction handlers.
///
/// Values are returned through Solana return data, so clients read them with
/// a simulated transaction.

use anchor_lang::prelude::*;

use crate::checkpoint::Checkpoint;
use crate::constants::*;
use crate::error::ChefError;
use crate::reward;
use crate::state::{Chef, Pool, UserDeposit};

/// Accounts required for a pending reward query.
#[derive(Accounts)]
#[instruction(pool_id: u64, depositor: Pubkey)]
pub struct PendingReward<'info> {
    #[account(
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump
    )]
    pub chef: Account<'info, Chef>,

    #[account(
        seeds = [POOL_SEED, chef.key().as_ref(), &pool_id.to_le_bytes()],
        bump = pool.bump,
        has_one = chef
    )]
    pub pool: Account<'info, Pool>,

    /// Absent when `depositor` never deposited into the pool.
    #[account(
        seeds = [DEPOSIT_SEED, pool.key().as_ref(), depositor.as_ref()],
        bump = user_deposit.bump,
        constraint = user_deposit.pool == pool.key() @ ChefError::DepositPoolMismatch
    )]
    pub user_deposit: Option<Account<'info, UserDeposit>>,
}

/// Accounts required for a pool count query.
#[derive(Accounts)]
pub struct PoolCount<'info> {
    #[account(
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump
    )]
    pub chef: Account<'info, Chef>,
}

/// Reward `depositor` would receive if they harvested at the current slot.
pub fn pending_reward_handler(
    ctx: Context<PendingReward>,
    pool_id: u64,
    depositor: Pubkey,
) -> Result<u64> {
    ctx.accounts.chef.assert_pool(pool_id)?;
    let Some(user_deposit) = ctx.accounts.user_deposit.as_ref() else {
        msg!("No deposit for {} in pool {}", depositor, pool_id);
        return Ok(0);
    };

    let now = Checkpoint::current()?;
    let pending = reward::pending_reward(user_deposit, &ctx.accounts.pool, now.block)?;

    msg!("Pending reward for {} in pool {}: {}", depositor, pool_id, pending);
    Ok(pending)
}

pub fn pool_count_handler(ctx: Context<PoolCount>) -> Result<u64> {
    Ok(ctx.accounts.chef.pool_count)
}
