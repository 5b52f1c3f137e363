/// Initialize instruction handler.
///
/// Creates the chef account that heads the pool registry for one reward
/// mint. The signer becomes the permanent owner.
///
/// ## Deployment Notes
/// - The chef PDA must be set as the reward mint's mint authority before
///   any reward can be paid; until then every mint fails with
///   `MintUnauthorized`.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::state::Chef;

/// Accounts required for chef initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The owner that will administer every pool.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The chef account to be created.
    /// SECURITY: PDA derived from CHEF_SEED + reward mint, one chef per mint.
    #[account(
        init,
        payer = owner,
        space = Chef::LEN,
        seeds = [CHEF_SEED, reward_mint.key().as_ref()],
        bump
    )]
    pub chef: Account<'info, Chef>,

    /// The reward token minted to depositors.
    pub reward_mint: Account<'info, Mint>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the chef.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let chef_key = ctx.accounts.chef.key();
    let chef = &mut ctx.accounts.chef;

    chef.owner = ctx.accounts.owner.key();
    chef.reward_mint = ctx.accounts.reward_mint.key();
    chef.pool_count = 0;
    chef.bump = ctx.bumps.chef;

    msg!("Staking chef initialized");
    msg!("Owner: {}", chef.owner);
    msg!("Reward mint: {}", chef.reward_mint);
    if ctx.accounts.reward_mint.mint_authority != COption::Some(chef_key) {
        msg!("Chef {} is not yet the reward mint authority", chef_key);
    }

    Ok(())
}
