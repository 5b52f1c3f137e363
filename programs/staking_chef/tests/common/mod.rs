//! Host harness for driving the chef engine without a validator.
//!
//! Pools, deposit records and the chef live in plain memory. Token custody
//! and reward minting are in-memory fakes that can be told to fail, and the
//! slot and clock only move when a test advances them.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;

use staking_chef::checkpoint::Checkpoint;
use staking_chef::error::ChefError;
use staking_chef::events::{Harvested, PoolClosed, PoolCreated, Withdrew, WithdrewFees};
use staking_chef::fees;
use staking_chef::ledger::{DepositLedger, DepositOutcome, WithdrawOutcome};
use staking_chef::pda;
use staking_chef::ports::{RewardMintPort, StakingAssetPort};
use staking_chef::registry::{self, PoolCustody, PoolParams};
use staking_chef::state::{Chef, Pool, UserDeposit};

pub const START_BLOCK: u64 = 1_000;
pub const START_TIME: i64 = 1_700_000_000;

/// 100 tokens at 9 decimals.
pub const DEPOSIT_AMOUNT: u64 = 100_000_000_000;

/// Parameters most scenarios run with: 20_000 reward units per slot for
/// every 10_000_000 staked, a 0.2% deposit fee and a one-day lock.
pub fn default_params() -> PoolParams {
    PoolParams {
        amount_per_reward: 10_000_000,
        reward_per_block: 20_000,
        deposit_fee_per_mille: 2,
        minimum_deposit: 1_000_000_000,
        lock_duration_seconds: 86_400,
    }
}

/// Token balances for one staking mint: the pool vault plus user wallets.
#[derive(Debug, Default)]
pub struct MemoryAsset {
    pub vault: Pubkey,
    pub balances: HashMap<Pubkey, u64>,
    pub fail_pull: bool,
    pub fail_push: bool,
}

impl MemoryAsset {
    pub fn new(vault: Pubkey) -> Self {
        Self {
            vault,
            ..Self::default()
        }
    }

    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn debit(&mut self, account: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.balances.entry(*account).or_default();
        *balance = balance
            .checked_sub(amount)
            .ok_or(ChefError::TransferFailed)?;
        Ok(())
    }

    fn credit(&mut self, account: &Pubkey, amount: u64) {
        *self.balances.entry(*account).or_default() += amount;
    }
}

impl StakingAssetPort for MemoryAsset {
    fn pull_from(&mut self, depositor: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.fail_pull, ChefError::TransferFailed);
        self.debit(depositor, amount)?;
        let vault = self.vault;
        self.credit(&vault, amount);
        Ok(())
    }

    fn push_to(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.fail_push, ChefError::TransferFailed);
        let vault = self.vault;
        self.debit(&vault, amount)?;
        self.credit(recipient, amount);
        Ok(())
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u64> {
        Ok(self.balance(account))
    }
}

/// Reward token supply keyed by holder.
#[derive(Debug)]
pub struct MemoryMinter {
    pub authorized: bool,
    pub minted: HashMap<Pubkey, u64>,
    pub calls: usize,
}

impl Default for MemoryMinter {
    fn default() -> Self {
        Self {
            authorized: true,
            minted: HashMap::new(),
            calls: 0,
        }
    }
}

impl MemoryMinter {
    pub fn balance(&self, holder: &Pubkey) -> u64 {
        self.minted.get(holder).copied().unwrap_or_default()
    }
}

impl RewardMintPort for MemoryMinter {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require!(self.authorized, ChefError::MintUnauthorized);
        self.calls += 1;
        *self.minted.entry(*recipient).or_default() += amount;
        Ok(())
    }
}

/// One chef with its pools, deposit records, custody and reward supply.
pub struct Harness {
    pub owner: Pubkey,
    pub chef_key: Pubkey,
    pub chef: Chef,
    pub pools: Vec<Pool>,
    pub assets: Vec<MemoryAsset>,
    pub deposits: HashMap<(u64, Pubkey), UserDeposit>,
    pub minter: MemoryMinter,
    pub now: Checkpoint,
}

impl Harness {
    pub fn new() -> Self {
        let owner = Pubkey::new_unique();
        let reward_mint = Pubkey::new_unique();
        let (chef_key, bump) = pda::chef_pda(&reward_mint);
        Self {
            owner,
            chef_key,
            chef: Chef {
                owner,
                reward_mint,
                pool_count: 0,
                bump,
                ..Chef::default()
            },
            pools: Vec::new(),
            assets: Vec::new(),
            deposits: HashMap::new(),
            minter: MemoryMinter::default(),
            now: Checkpoint::new(START_BLOCK, START_TIME),
        }
    }

    /// Harness with one pool created from [`default_params`].
    pub fn with_pool() -> Self {
        let mut harness = Self::new();
        let owner = harness.owner;
        harness
            .create_pool(&owner, default_params())
            .expect("default pool");
        harness
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.now.block += blocks;
    }

    pub fn advance_time(&mut self, seconds: i64) {
        self.now.timestamp += seconds;
    }

    /// A wallet holding `amount` of pool `pool_id`'s staking token.
    pub fn funded_user(&mut self, pool_id: u64, amount: u64) -> Pubkey {
        let user = Pubkey::new_unique();
        self.fund(pool_id, &user, amount);
        user
    }

    pub fn fund(&mut self, pool_id: u64, user: &Pubkey, amount: u64) {
        *self.assets[pool_id as usize]
            .balances
            .entry(*user)
            .or_default() += amount;
    }

    pub fn pool(&self, pool_id: u64) -> &Pool {
        &self.pools[pool_id as usize]
    }

    pub fn pool_key(&self, pool_id: u64) -> Pubkey {
        pda::pool_pda(&self.chef_key, pool_id).0
    }

    pub fn position(&self, pool_id: u64, user: &Pubkey) -> UserDeposit {
        self.deposits
            .get(&(pool_id, *user))
            .cloned()
            .unwrap_or_default()
    }

    pub fn token_balance(&self, pool_id: u64, account: &Pubkey) -> u64 {
        self.assets[pool_id as usize].balance(account)
    }

    pub fn vault_balance(&self, pool_id: u64) -> u64 {
        let asset = &self.assets[pool_id as usize];
        asset.balance(&asset.vault)
    }

    pub fn reward_balance(&self, user: &Pubkey) -> u64 {
        self.minter.balance(user)
    }

    pub fn create_pool(&mut self, caller: &Pubkey, params: PoolParams) -> Result<PoolCreated> {
        let pool_id = self.chef.pool_count;
        let (pool_key, bump) = pda::pool_pda(&self.chef_key, pool_id);
        let (vault, vault_bump) = pda::vault_pda(&pool_key);
        let custody = PoolCustody {
            chef: self.chef_key,
            staking_mint: Pubkey::new_unique(),
            vault,
            bump,
            vault_bump,
        };

        let mut pool = Pool::default();
        let event = registry::create_pool(&mut self.chef, caller, &mut pool, custody, params)?;
        self.pools.push(pool);
        self.assets.push(MemoryAsset::new(vault));
        Ok(event)
    }

    pub fn close_pool(
        &mut self,
        caller: &Pubkey,
        pool_id: u64,
        last_rewarded_block: u64,
    ) -> Result<PoolClosed> {
        registry::close_pool(
            &self.chef,
            caller,
            &mut self.pools[pool_id as usize],
            last_rewarded_block,
            self.now.block,
        )
    }

    pub fn deposit(&mut self, pool_id: u64, user: &Pubkey, amount: u64) -> Result<DepositOutcome> {
        let mut position = self.deposits.get(&(pool_id, *user)).cloned().unwrap_or_else(|| {
            let pool_key = self.pool_key(pool_id);
            let (_, bump) = pda::user_deposit_pda(&pool_key, user);
            let mut record = UserDeposit::default();
            record.open(*user, pool_key, bump);
            record
        });

        let outcome = DepositLedger::open(&self.chef, &mut self.pools[pool_id as usize], self.now)?
            .deposit(
                &mut position,
                user,
                amount,
                &mut self.assets[pool_id as usize],
                &mut self.minter,
            )?;
        self.deposits.insert((pool_id, *user), position);
        Ok(outcome)
    }

    pub fn withdraw(&mut self, pool_id: u64, user: &Pubkey, amount: u64) -> Result<WithdrawOutcome> {
        let mut position = self.position(pool_id, user);
        let outcome = DepositLedger::open(&self.chef, &mut self.pools[pool_id as usize], self.now)?
            .withdraw(
                &mut position,
                user,
                amount,
                &mut self.assets[pool_id as usize],
                &mut self.minter,
            )?;
        self.deposits.insert((pool_id, *user), position);
        Ok(outcome)
    }

    pub fn emergency_withdraw(&mut self, pool_id: u64, user: &Pubkey, amount: u64) -> Result<Withdrew> {
        let mut position = self.position(pool_id, user);
        let event = DepositLedger::open(&self.chef, &mut self.pools[pool_id as usize], self.now)?
            .emergency_withdraw(
                &mut position,
                user,
                amount,
                &mut self.assets[pool_id as usize],
            )?;
        self.deposits.insert((pool_id, *user), position);
        Ok(event)
    }

    pub fn harvest(&mut self, pool_id: u64, user: &Pubkey) -> Result<Harvested> {
        let mut position = self.position(pool_id, user);
        let event = DepositLedger::open(&self.chef, &mut self.pools[pool_id as usize], self.now)?
            .harvest(&mut position, user, &mut self.minter)?;
        self.deposits.insert((pool_id, *user), position);
        Ok(event)
    }

    pub fn pending_reward(&mut self, pool_id: u64, user: &Pubkey) -> Result<u64> {
        let position = self.position(pool_id, user);
        DepositLedger::open(&self.chef, &mut self.pools[pool_id as usize], self.now)?
            .pending_reward(&position)
    }

    pub fn withdraw_fees(
        &mut self,
        caller: &Pubkey,
        pool_id: u64,
        to: &Pubkey,
        amount: u64,
    ) -> Result<WithdrewFees> {
        fees::withdraw_fees(
            &self.chef,
            caller,
            &mut self.pools[pool_id as usize],
            to,
            amount,
            &mut self.assets[pool_id as usize],
        )
    }
}

/// `floor(amount * reward_per_block * blocks / amount_per_reward)` in
/// wide arithmetic, for building expectations.
pub fn expected_reward(amount: u64, params: &PoolParams, blocks: u64) -> u64 {
    let wide = amount as u128 * params.reward_per_block as u128 * blocks as u128
        / params.amount_per_reward as u128;
    wide as u64
}

/// Net of the deposit fee.
pub fn net_of_fee(gross: u64, fee_per_mille: u16) -> u64 {
    gross - gross * fee_per_mille as u64 / 1_000
}
