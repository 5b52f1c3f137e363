//! Program-derived addresses.
//!
//! Pools and deposit records live at deterministic addresses, so the pool
//! list, single pool lookup and single deposit lookup are plain account
//! reads at the addresses derived here.

use anchor_lang::prelude::*;

use crate::constants::*;

pub fn chef_pda(reward_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CHEF_SEED, reward_mint.as_ref()], &crate::ID)
}

pub fn pool_pda(chef: &Pubkey, pool_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_SEED, chef.as_ref(), &pool_id.to_le_bytes()],
        &crate::ID,
    )
}

pub fn vault_pda(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, pool.as_ref()], &crate::ID)
}

pub fn user_deposit_pda(pool: &Pubkey, depositor: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[DEPOSIT_SEED, pool.as_ref(), depositor.as_ref()],
        &crate::ID,
    )
}

/// Every pool address in id order.
pub fn pool_pdas(chef: &Pubkey, pool_count: u64) -> Vec<Pubkey> {
    (0..pool_count)
        .map(|pool_id| pool_pda(chef, pool_id).0)
        .collect()
}
