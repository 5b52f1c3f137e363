use anchor_lang::prelude::*;

use crate::error::ChefError;

/// A depositor's live position in one pool.
#[account]
#[derive(Default, Debug)]
pub struct UserDeposit {
    pub owner: Pubkey,
    pub pool: Pubkey,

    /// Net-of-fee staked balance.
    pub amount: u64,
    /// Block up to which reward has been settled.
    pub reward_block_start: u64,
    /// Unix timestamp before which ordinary withdrawal is refused.
    pub lock_time_end: i64,

    pub bump: u8,
}

impl UserDeposit {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// Binds a freshly created record to its depositor and pool.
    pub fn open(&mut self, owner: Pubkey, pool: Pubkey, bump: u8) {
        self.owner = owner;
        self.pool = pool;
        self.bump = bump;
    }

    pub fn is_open(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn assert_owner(&self, depositor: &Pubkey) -> Result<()> {
        require_keys_eq!(*depositor, self.owner, ChefError::NotDepositOwner);
        Ok(())
    }

    pub fn is_lock_ended(&self, now: i64) -> bool {
        now >= self.lock_time_end
    }
}
