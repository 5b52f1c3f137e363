//! Deposit instruction handler.
//!
//! Handles staking tokens into a pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::checkpoint::Checkpoint;
use crate::constants::*;
use crate::error::ChefError;
use crate::ledger::DepositLedger;
use crate::ports::{SplCustody, SplRewardMinter};
use crate::state::{Chef, Pool, UserDeposit};

/// Accounts required for depositing.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Deposit<'info> {
    /// The user depositing tokens.
    #[account(mut)]
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

    /// User's deposit record (created on first deposit).
    #[account(
        init_if_needed,
        payer = depositor,
        space = UserDeposit::LEN,
        seeds = [DEPOSIT_SEED, pool.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub user_deposit: Account<'info, UserDeposit>,

    /// User's token account for the staking token.
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

    /// User's token account receiving reward settled on top-ups.
    #[account(
        mut,
        constraint = depositor_reward_account.mint == chef.reward_mint @ ChefError::RewardMintMismatch,
        constraint = depositor_reward_account.owner == depositor.key() @ ChefError::NotDepositOwner
    )]
    pub depositor_reward_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Deposit tokens into a pool.
///
/// # Arguments
/// * `ctx` - Deposit accounts context
/// * `pool_id` - Target pool
/// * `amount` - Gross amount, before the deposit fee
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Deposit>, pool_id: u64, amount: u64) -> Result<()> {
    let now = Checkpoint::current()?;
    let depositor = ctx.accounts.depositor.key();
    let pool_key = ctx.accounts.pool.key();

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
    )
    .with_holder_authority(ctx.accounts.depositor.to_account_info());
    let mut minter = SplRewardMinter::new(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        ctx.accounts.chef.to_account_info(),
        chef_signer,
        &ctx.accounts.depositor_reward_account,
    );

    let user_deposit = &mut ctx.accounts.user_deposit;
    if !user_deposit.is_open() {
        user_deposit.open(depositor, pool_key, ctx.bumps.user_deposit);
    }

    let mut ledger = DepositLedger::open(&ctx.accounts.chef, &mut ctx.accounts.pool, now)?;
    let outcome = ledger.deposit(user_deposit, &depositor, amount, &mut custody, &mut minter)?;

    msg!(
        "Deposited {} tokens into pool {} (fee {}, net {})",
        amount,
        pool_id,
        outcome.fee,
        outcome.net
    );
    if outcome.reward > 0 {
        msg!("Settled {} reward tokens", outcome.reward);
    }
    msg!("Total deposited by user: {}", user_deposit.amount);
    msg!("Locked until: {}", user_deposit.lock_time_end);

    emit!(outcome.event);

    Ok(())
}
