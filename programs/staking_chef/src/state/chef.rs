use anchor_lang::prelude::*;

use crate::error::ChefError;

/// Registry head: the owner identity, the reward mint the chef mints from,
/// and how many pools have been appended so far.
#[account]
#[derive(Default, Debug)]
pub struct Chef {
    pub owner: Pubkey,
    pub reward_mint: Pubkey,
    pub pool_count: u64,
    pub bump: u8,
    pub _reserved: [u8; 32],
}

impl Chef {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1 + 32;

    /// Explicit owner guard used at every administrative entry point.
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ChefError::Unauthorized);
        Ok(())
    }

    /// Pool ids are dense and zero-based; anything at or past the count was
    /// never created.
    pub fn assert_pool(&self, pool_id: u64) -> Result<()> {
        require!(pool_id < self.pool_count, ChefError::PoolNotFound);
        Ok(())
    }

    /// Reserves the next pool id.
    pub fn next_pool_id(&mut self) -> Result<u64> {
        let pool_id = self.pool_count;
        self.pool_count = self
            .pool_count
            .checked_add(1)
            .ok_or(ChefError::MathOverflow)?;
        Ok(pool_id)
    }
}
