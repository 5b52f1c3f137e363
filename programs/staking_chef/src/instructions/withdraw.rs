//! Withdraw instruction handler.
//!
//! Handles withdrawing staked tokens after the lock has ended.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::checkpoint::Checkpoint;
use crate::constants::*;
use crate::error::ChefError;
use crate::ledger::DepositLedger;
use crate::ports::{SplCustody, SplRewardMinter};
use crate::state::{Chef, Pool, UserDeposit};

/// Accounts required for withdrawing.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Withdraw<'info> {
    /// The user withdrawing tokens.
    pub depositor: Signer<'info>,

    #[account(
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump,
        has_one = reward_mint @ ChefError::RewardMintMismatch
    )]
    pub chef: Account<'info, Chef>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool_id.to_le_bytes()],
        bump = pool.bump,
        has_one = chef,
        has_one = vault @ ChefError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// User's deposit record.
    #[account(
        mut,
        seeds = [DEPOSIT_SEED, pool.key().as_ref(), depositor.key().as_ref()],
        bump = user_deposit.bump,
        constraint = user_deposit.owner == depositor.key() @ ChefError::NotDepositOwner,
        constraint = user_deposit.pool == pool.key() @ ChefError::DepositPoolMismatch
    )]
    pub user_deposit: Account<'info, UserDeposit>,

    /// User's token account receiving the withdrawn tokens.
    #[account(
        mut,
        constraint = depositor_token_account.mint == pool.staking_mint @ ChefError::MintMismatch,
        constraint = depositor_token_account.owner == depositor.key() @ ChefError::NotDepositOwner
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    /// Pool's custody vault.
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub reward_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = depositor_reward_account.mint == chef.reward_mint @ ChefError::RewardMintMismatch,
        constraint = depositor_reward_account.owner == depositor.key() @ ChefError::NotDepositOwner
    )]
    pub depositor_reward_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Withdraw tokens from a pool.
///
/// Settles pending reward before the tokens leave custody.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `pool_id` - Source pool
/// * `amount` - Amount of staked tokens to withdraw
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Withdraw>, pool_id: u64, amount: u64) -> Result<()> {
    let now = Checkpoint::current()?;
    let depositor = ctx.accounts.depositor.key();

    let chef_key = ctx.accounts.chef.key();
    let pool_id_bytes = pool_id.to_le_bytes();
    let pool_bump = [ctx.accounts.pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED, chef_key.as_ref(), &pool_id_bytes, &pool_bump];
    let pool_signer = &[pool_seeds];

    let reward_mint_key = ctx.accounts.chef.reward_mint;
    let chef_bump = [ctx.accounts.chef.bump];
    let chef_seeds: &[&[u8]] = &[CHEF_SEED, reward_mint_key.as_ref(), &chef_bump];
    let chef_signer = &[chef_seeds];

    let mut custody = SplCustody::new(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        ctx.accounts.pool.to_account_info(),
        pool_signer,
        &ctx.accounts.depositor_token_account,
    );
    let mut minter = SplRewardMinter::new(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        ctx.accounts.chef.to_account_info(),
        chef_signer,
        &ctx.accounts.depositor_reward_account,
    );

    let user_deposit = &mut ctx.accounts.user_deposit;
    let mut ledger = DepositLedger::open(&ctx.accounts.chef, &mut ctx.accounts.pool, now)?;
    let outcome = ledger.withdraw(user_deposit, &depositor, amount, &mut custody, &mut minter)?;

    msg!("Withdrew {} tokens from pool {}", amount, pool_id);
    msg!("Settled {} reward tokens", outcome.reward);
    msg!("Remaining deposited: {}", user_deposit.amount);

    emit!(outcome.event);

    Ok(())
}
