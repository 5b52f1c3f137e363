/// Withdraw fees instruction handler.
///
/// Sends collected deposit fees out of a pool vault.
///
/// ## Security Guarantees
/// - Only the chef owner can withdraw (checked by the fee ledger)
/// - Vault must be the pool's stored vault
/// - Recipient token account must hold the pool's staking mint and belong
///   to `to`

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::ChefError;
use crate::fees;
use crate::ports::SplCustody;
use crate::state::{Chef, Pool};

/// Accounts required for withdrawing fees.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct WithdrawFees<'info> {
    /// Must be the chef owner.
    pub owner: Signer<'info>,

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

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == pool.staking_mint @ ChefError::MintMismatch
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Withdraw collected fees.
///
/// # Arguments
/// * `ctx` - WithdrawFees accounts context
/// * `pool_id` - Pool whose fees are withdrawn
/// * `to` - Owner of the recipient token account
/// * `amount` - Amount of fees to send
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<WithdrawFees>, pool_id: u64, to: Pubkey, amount: u64) -> Result<()> {
    let caller = ctx.accounts.owner.key();
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
        &ctx.accounts.recipient_token_account,
    );

    let event = fees::withdraw_fees(
        &ctx.accounts.chef,
        &caller,
        &mut ctx.accounts.pool,
        &to,
        amount,
        &mut custody,
    )?;

    msg!("Withdrew {} fees from pool {} to {}", event.amount, pool_id, to);
    msg!("Fees remaining: {}", ctx.accounts.pool.collected_fees);
    emit!(event);

    Ok(())
}
