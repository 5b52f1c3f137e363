/// Admin instruction handlers.
///
/// Per-field pool administration and pool closing.
///
/// ## Security Guarantees
/// - Every handler goes through the registry's explicit owner guard
/// - PDA validation ties the pool to this chef and to `pool_id`
/// - Parameter bounds are checked before any field changes

use anchor_lang::prelude::*;

use crate::checkpoint::Checkpoint;
use crate::constants::*;
use crate::registry;
use crate::state::{Chef, Pool};

/// Accounts required for pool administration.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct AdminPool<'info> {
    /// Must be the chef owner.
    pub owner: Signer<'info>,

    #[account(
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump
    )]
    pub chef: Account<'info, Chef>,

    /// The pool to modify.
    /// SECURITY: PDA validation + has_one chef.
    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool_id.to_le_bytes()],
        bump = pool.bump,
        has_one = chef
    )]
    pub pool: Account<'info, Pool>,
}

/// Set the reward divisor. Must be positive.
pub fn set_amount_per_reward_handler(
    ctx: Context<AdminPool>,
    pool_id: u64,
    amount_per_reward: u64,
) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let previous = ctx.accounts.pool.amount_per_reward;
    let event = registry::set_amount_per_reward(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        amount_per_reward,
    )?;

    msg!(
        "Pool {} amount per reward: {} -> {}",
        pool_id,
        previous,
        event.amount_per_reward
    );
    emit!(event);

    Ok(())
}

/// Set the reward rate numerator.
///
/// # Security
/// - Applies to every unsettled block, including those already elapsed
pub fn set_reward_per_block_handler(
    ctx: Context<AdminPool>,
    pool_id: u64,
    reward_per_block: u64,
) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let previous = ctx.accounts.pool.reward_per_block;
    let event = registry::set_reward_per_block(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        reward_per_block,
    )?;

    msg!(
        "Pool {} reward per block: {} -> {}",
        pool_id,
        previous,
        event.reward_per_block
    );
    emit!(event);

    Ok(())
}

/// Set the deposit fee (per mille, at most 1000).
pub fn set_deposit_fee_handler(
    ctx: Context<AdminPool>,
    pool_id: u64,
    deposit_fee_per_mille: u16,
) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let previous = ctx.accounts.pool.deposit_fee_per_mille;
    let event = registry::set_deposit_fee(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        deposit_fee_per_mille,
    )?;

    msg!(
        "Pool {} deposit fee: {} -> {} per mille",
        pool_id,
        previous,
        event.deposit_fee_per_mille
    );
    emit!(event);

    Ok(())
}

pub fn set_minimum_deposit_handler(
    ctx: Context<AdminPool>,
    pool_id: u64,
    minimum_deposit: u64,
) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let previous = ctx.accounts.pool.minimum_deposit;
    let event = registry::set_minimum_deposit(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        minimum_deposit,
    )?;

    msg!(
        "Pool {} minimum deposit: {} -> {}",
        pool_id,
        previous,
        event.minimum_deposit
    );
    emit!(event);

    Ok(())
}

pub fn set_lock_time_handler(
    ctx: Context<AdminPool>,
    pool_id: u64,
    lock_duration_seconds: i64,
) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let previous = ctx.accounts.pool.lock_duration_seconds;
    let event = registry::set_lock_time(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        lock_duration_seconds,
    )?;

    msg!(
        "Pool {} lock time: {}s -> {}s",
        pool_id,
        previous,
        event.lock_duration_seconds
    );
    emit!(event);

    Ok(())
}

/// Close a pool at `last_rewarded_block`.
///
/// # Security
/// - The cap must be strictly after the current slot
/// - A pool closes once; the cap cannot be moved afterwards
/// - Deposits and withdrawals stay available
pub fn close_pool_handler(
    ctx: Context<AdminPool>,
    pool_id: u64,
    last_rewarded_block: u64,
) -> Result<()> {
    let now = Checkpoint::current()?;
    let caller = ctx.accounts.owner.key();
    let event = registry::close_pool(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        last_rewarded_block,
        now.block,
    )?;

    msg!(
        "Pool {} closed: reward stops at block {} (current {})",
        pool_id,
        event.last_rewarded_block,
        now.block
    );
    emit!(event);

    Ok(())
}
