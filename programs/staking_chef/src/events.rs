//! Events emitted by the Staking Chef program.
//!
//! Engine functions build these and hand them back; instruction handlers
//! `emit!` them. Field order is part of the public contract.

use anchor_lang::prelude::*;

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolCreated {
    pub staking_mint: Pubkey,
    pub pool_id: u64,
    pub amount_per_reward: u64,
    pub reward_per_block: u64,
    pub deposit_fee_per_mille: u16,
    pub minimum_deposit: u64,
    pub lock_duration_seconds: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountPerRewardUpdated {
    pub pool_id: u64,
    pub amount_per_reward: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardPerBlockUpdated {
    pub pool_id: u64,
    pub reward_per_block: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositFeeUpdated {
    pub pool_id: u64,
    pub deposit_fee_per_mille: u16,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimumDepositUpdated {
    pub pool_id: u64,
    pub minimum_deposit: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockTimeUpdated {
    pub pool_id: u64,
    pub lock_duration_seconds: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolClosed {
    pub pool_id: u64,
    pub last_rewarded_block: u64,
}

/// Carries the gross amount, before the deposit fee.
#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deposited {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
}

/// Shared by ordinary and emergency withdrawals.
#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Withdrew {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Harvested {
    pub pool_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrewFees {
    pub pool_id: u64,
    pub amount: u64,
}
