/// Create pool instruction handler.
///
/// Appends a pool at the next id, with its own custody vault.
///
/// ## Security Guarantees
/// - Only the chef owner can create pools (checked by the registry)
/// - Vault is a PDA owned by the pool PDA
/// - Pool PDA is keyed by the id it is created at, so ids are never reused

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::registry::{self, PoolCustody, PoolParams};
use crate::state::{Chef, Pool};

/// Accounts required for pool creation.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// Must be the chef owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump
    )]
    pub chef: Account<'info, Chef>,

    /// The pool to be created at id `chef.pool_count`.
    #[account(
        init,
        payer = owner,
        space = Pool::LEN,
        seeds = [POOL_SEED, chef.key().as_ref(), &chef.pool_count.to_le_bytes()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// The asset this pool accepts. Fixed for the life of the pool.
    pub staking_mint: Account<'info, Mint>,

    /// Custody for staked principal and collected fees.
    /// SECURITY: Authority set to the pool PDA (cannot be changed).
    #[account(
        init,
        payer = owner,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Create a pool.
///
/// # Arguments
/// * `ctx` - CreatePool accounts context
/// * `params` - Reward rate, fee, minimum deposit and lock configuration
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<CreatePool>, params: PoolParams) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let custody = PoolCustody {
        chef: ctx.accounts.chef.key(),
        staking_mint: ctx.accounts.staking_mint.key(),
        vault: ctx.accounts.vault.key(),
        bump: ctx.bumps.pool,
        vault_bump: ctx.bumps.vault,
    };

    let event = registry::create_pool(
        &mut ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        custody,
        params,
    )?;

    msg!("Pool {} created for mint {}", event.pool_id, event.staking_mint);
    msg!(
        "Amount per reward: {}, reward per block: {}",
        event.amount_per_reward,
        event.reward_per_block
    );
    msg!(
        "Deposit fee: {} per mille, minimum deposit: {}, lock: {}s",
        event.deposit_fee_per_mille,
        event.minimum_deposit,
        event.lock_duration_seconds
    );

    emit!(event);

    Ok(())
}
