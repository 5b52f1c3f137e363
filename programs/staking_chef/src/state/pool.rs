use anchor_lang::prelude::*;

#[account]
#[derive(Default, Debug)]
pub struct Pool {
    pub chef: Pubkey,
    pub pool_id: u64,

    pub staking_mint: Pubkey,
    pub vault: Pubkey,

    /// Reward divisor, always positive.
    pub amount_per_reward: u64,
    pub reward_per_block: u64,
    pub deposit_fee_per_mille: u16,
    pub minimum_deposit: u64,
    pub lock_duration_seconds: i64,

    /// Close cap; `None` while the pool is open.
    pub last_rewarded_block: Option<u64>,

    /// Unwithdrawn deposit fees held in the vault.
    pub collected_fees: u64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl Pool {
    pub const LEN: usize = 8
        + 32 + 8
        + (32 * 2)
        + (8 * 2) + 2 + 8 + 8
        + (1 + 8)
        + 8
        + 2;

    pub fn is_closed(&self) -> bool {
        self.last_rewarded_block.is_some()
    }
}
