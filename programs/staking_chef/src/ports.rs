//! External collaborators of the engine.
//!
//! The ledger only ever moves the staking asset and mints reward through
//! these two traits. On-chain they are backed by SPL token CPIs; tests back
//! them with in-memory fakes.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::error::ChefError;

/// Moves the staked asset between a user and pool custody.
pub trait StakingAssetPort {
    /// Pulls `amount` from `depositor` into custody.
    fn pull_from(&mut self, depositor: &Pubkey, amount: u64) -> Result<()>;

    /// Pushes `amount` out of custody to `recipient`.
    fn push_to(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;

    fn balance_of(&self, account: &Pubkey) -> Result<u64>;
}

/// Mints reward token units. Only an authorized minter may call it; a
/// rejection means the deployment is miswired.
pub trait RewardMintPort {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// SPL token custody: one pool vault and one holder token account.
///
/// The vault is signed for by the pool PDA. Pulls additionally need the
/// holder's signer, supplied with [`SplCustody::with_holder_authority`].
pub struct SplCustody<'a, 'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    vault_amount: u64,
    vault_authority: AccountInfo<'info>,
    vault_signer: &'a [&'a [&'a [u8]]],
    holder: AccountInfo<'info>,
    holder_owner: Pubkey,
    holder_amount: u64,
    holder_authority: Option<AccountInfo<'info>>,
}

impl<'a, 'info> SplCustody<'a, 'info> {
    pub fn new(
        token_program: &Program<'info, Token>,
        vault: &Account<'info, TokenAccount>,
        vault_authority: AccountInfo<'info>,
        vault_signer: &'a [&'a [&'a [u8]]],
        holder: &Account<'info, TokenAccount>,
    ) -> Self {
        Self {
            token_program: token_program.to_account_info(),
            vault: vault.to_account_info(),
            vault_amount: vault.amount,
            vault_authority,
            vault_signer,
            holder: holder.to_account_info(),
            holder_owner: holder.owner,
            holder_amount: holder.amount,
            holder_authority: None,
        }
    }

    pub fn with_holder_authority(mut self, authority: AccountInfo<'info>) -> Self {
        self.holder_authority = Some(authority);
        self
    }
}

impl<'a, 'info> StakingAssetPort for SplCustody<'a, 'info> {
    fn pull_from(&mut self, depositor: &Pubkey, amount: u64) -> Result<()> {
        let authority = self
            .holder_authority
            .clone()
            .ok_or(ChefError::TransferFailed)?;
        require_keys_eq!(authority.key(), *depositor, ChefError::NotDepositOwner);
        require_keys_eq!(self.holder_owner, *depositor, ChefError::TransferFailed);
        require!(self.holder_amount >= amount, ChefError::TransferFailed);

        let cpi_accounts = Transfer {
            from: self.holder.clone(),
            to: self.vault.clone(),
            authority,
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token::transfer(cpi_ctx, amount)?;

        self.holder_amount -= amount;
        self.vault_amount = self
            .vault_amount
            .checked_add(amount)
            .ok_or(ChefError::MathOverflow)?;
        Ok(())
    }

    fn push_to(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.holder_owner, *recipient, ChefError::TransferFailed);
        require!(self.vault_amount >= amount, ChefError::TransferFailed);

        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: self.holder.clone(),
            authority: self.vault_authority.clone(),
        };
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, self.vault_signer);
        token::transfer(cpi_ctx, amount)?;

        self.vault_amount -= amount;
        self.holder_amount = self
            .holder_amount
            .checked_add(amount)
            .ok_or(ChefError::MathOverflow)?;
        Ok(())
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u64> {
        if *account == self.vault.key() {
            Ok(self.vault_amount)
        } else if *account == self.holder.key() || *account == self.holder_owner {
            Ok(self.holder_amount)
        } else {
            err!(ChefError::VaultMismatch)
        }
    }
}

/// SPL mint authority held by the chef PDA.
pub struct SplRewardMinter<'a, 'info> {
    token_program: AccountInfo<'info>,
    reward_mint: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    authority_signer: &'a [&'a [&'a [u8]]],
    destination: AccountInfo<'info>,
    destination_owner: Pubkey,
    authorized: bool,
}

impl<'a, 'info> SplRewardMinter<'a, 'info> {
    pub fn new(
        token_program: &Program<'info, Token>,
        reward_mint: &Account<'info, Mint>,
        authority: AccountInfo<'info>,
        authority_signer: &'a [&'a [&'a [u8]]],
        destination: &Account<'info, TokenAccount>,
    ) -> Self {
        let authorized = reward_mint.mint_authority == COption::Some(authority.key());
        Self {
            token_program: token_program.to_account_info(),
            reward_mint: reward_mint.to_account_info(),
            authority,
            authority_signer,
            destination: destination.to_account_info(),
            destination_owner: destination.owner,
            authorized,
        }
    }
}

impl<'a, 'info> RewardMintPort for SplRewardMinter<'a, 'info> {
    fn mint(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require!(self.authorized, ChefError::MintUnauthorized);
        require_keys_eq!(self.destination_owner, *recipient, ChefError::NotDepositOwner);
        if amount == 0 {
            return Ok(());
        }

        let cpi_accounts = MintTo {
            mint: self.reward_mint.clone(),
            to: self.destination.clone(),
            authority: self.authority.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            cpi_accounts,
            self.authority_signer,
        );
        token::mint_to(cpi_ctx, amount)
    }
}
