//! Harvest instruction handler.
//!
//! Mints accumulated reward without touching the staked balance.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::checkpoint::Checkpoint;
use crate::constants::*;
use crate::error::ChefError;
use crate::ledger::DepositLedger;
use crate::ports::SplRewardMinter;
use crate::state::{Chef, Pool, UserDeposit};

/// Accounts required for harvesting.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Harvest<'info> {
    /// The user harvesting reward.
    pub depositor: Signer<'info>,

    #[account(
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump,
        has_one = reward_mint @ ChefError::RewardMintMismatch
    )]
    pub chef: Account<'info, Chef>,

    #[account(
        seeds = [POOL_SEED, chef.key().as_ref(), &pool_id.to_le_bytes()],
        bump = pool.bump,
        has_one = chef
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

    #[account(mut)]
    pub reward_mint: Account<'info, Mint>,

    /// User's token account receiving reward.
    #[account(
        mut,
        constraint = depositor_reward_account.mint == chef.reward_mint @ ChefError::RewardMintMismatch,
        constraint = depositor_reward_account.owner == depositor.key() @ ChefError::NotDepositOwner
    )]
    pub depositor_reward_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Harvest pending reward.
///
/// Minting zero is not an error; the checkpoint moves to the current slot
/// either way.
///
/// # Arguments
/// * `ctx` - Harvest accounts context
/// * `pool_id` - Pool to harvest from
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Harvest>, pool_id: u64) -> Result<()> {
    let now = Checkpoint::current()?;
    let depositor = ctx.accounts.depositor.key();

    let reward_mint_key = ctx.accounts.chef.reward_mint;
    let chef_bump = [ctx.accounts.chef.bump];
    let chef_seeds: &[&[u8]] = &[CHEF_SEED, reward_mint_key.as_ref(), &chef_bump];
    let chef_signer = &[chef_seeds];

    let mut minter = SplRewardMinter::new(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        ctx.accounts.chef.to_account_info(),
        chef_signer,
        &ctx.accounts.depositor_reward_account,
    );

    let user_deposit = &mut ctx.accounts.user_deposit;
    let mut ledger = DepositLedger::open(&ctx.accounts.chef, &mut ctx.accounts.pool, now)?;
    let event = ledger.harvest(user_deposit, &depositor, &mut minter)?;

    msg!("Harvested {} reward tokens from pool {}", event.amount, pool_id);
    msg!("Reward checkpoint: block {}", user_deposit.reward_block_start);

    emit!(event);

    Ok(())
}
