//! Emergency withdraw instruction handler.
//!
//! Withdraws staked tokens ignoring the lock. Unsettled reward is lost.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::checkpoint::Checkpoint;
use crate::constants::*;
use crate::error::ChefError;
use crate::ledger::DepositLedger;
use crate::ports::SplCustody;
use crate::state::{Chef, Pool, UserDeposit};

#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct EmergencyWithdraw<'info> {
    pub depositor: Signer<'info>,

    #[account(
        seeds = [CHEF_SEED, chef.reward_mint.as_ref()],
        bump = chef.bump
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

    #[account(
        mut,
        seeds = [DEPOSIT_SEED, pool.key().as_ref(), depositor.key().as_ref()],
        bump = user_deposit.bump,
        constraint = user_deposit.owner == depositor.key() @ ChefError::NotDepositOwner,
        constraint = user_deposit.pool == pool.key() @ ChefError::DepositPoolMismatch
    )]
    pub user_deposit: Account<'info, UserDeposit>,

    #[account(
        mut,
        constraint = depositor_token_account.mint == pool.staking_mint @ ChefError::MintMismatch,
        constraint = depositor_token_account.owner == depositor.key() @ ChefError::NotDepositOwner
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<EmergencyWithdraw>, pool_id: u64, amount: u64) -> Result<()> {
    let now = Checkpoint::current()?;
    let depositor = ctx.accounts.depositor.key();

    let chef_key = ctx.accounts.chef.key();
    let pool_id_bytes = pool_id.to_le_bytes();
    let pool_bump = [ctx.accounts.pool.bump];
    let pool_seeds: &[&[u8]] = &[POOL_SEED, chef_key.as_ref(), &pool_id_bytes, &pool_bump];
    let pool_signer = &[pool_seeds];

    let mut custody = SplCustody::new(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        ctx.accounts.pool.to_account_info(),
        pool_signer,
        &ctx.accounts.depositor_token_account,
    );

    let user_deposit = &mut ctx.accounts.user_deposit;
    let mut ledger = DepositLedger::open(&ctx.accounts.chef, &mut ctx.accounts.pool, now)?;
    let event = ledger.emergency_withdraw(user_deposit, &depositor, amount, &mut custody)?;

    msg!("Emergency withdrew {} tokens from pool {}", amount, pool_id);
    msg!("Remaining deposited: {}", user_deposit.amount);

    emit!(event);

    Ok(())
}
