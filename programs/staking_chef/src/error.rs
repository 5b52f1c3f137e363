//! Error types for the Staking Chef program.
//!
//! Every failure aborts the whole instruction; nothing is retried inside
//! the program.
//!
//! ## Error Groups
//! - 6000-6005: Input validation errors
//! - 6006: Deposit threshold errors
//! - 6007: Time/lock errors
//! - 6008-6010: Math/balance errors
//! - 6011-6013: Authorization errors
//! - 6014-6018: Account validation and external transfer errors

use anchor_lang::prelude::*;

/// Custom error codes for the Staking Chef program.
///
/// Error codes start at 6000 (Anchor's custom error offset) and follow
/// declaration order.
#[error_code]
pub enum ChefError {
    // ========== Input Validation Errors (6000-6005) ==========

    /// [6000] Deposit fee exceeds 1000 per mille.
    #[msg("Deposit fee should be equal to or lower than 1000 per mille")]
    DepositFeeTooHigh,

    /// [6001] The reward divisor must be positive.
    #[msg("Amount per reward must be greater than zero")]
    ZeroAmountPerReward,

    /// [6002] Lock durations are measured forward in time.
    #[msg("Lock duration cannot be negative")]
    NegativeLockDuration,

    /// [6003] Close height must be strictly after the current block.
    #[msg("Last rewarded block must be greater than current block")]
    CloseBlockNotInFuture,

    /// [6004] A pool can only be closed once.
    #[msg("Pool is already closed")]
    PoolAlreadyClosed,

    /// [6005] Pool id is outside the registry.
    #[msg("Pool not found")]
    PoolNotFound,

    // ========== Deposit Threshold Errors (6006) ==========

    /// [6006] First deposit into a pool is below its minimum.
    #[msg("Cannot deposit less than minimum deposit value")]
    BelowMinimumDeposit,

    // ========== Time/Lock Errors (6007) ==========

    /// [6007] Ordinary withdrawal attempted before the lock ends.
    #[msg("Cannot withdraw before lock time end")]
    LockActive,

    // ========== Math/Balance Errors (6008-6010) ==========

    /// [6008] Withdrawal exceeds the deposit balance.
    #[msg("Arithmetic underflow: amount exceeds deposited balance")]
    InsufficientBalance,

    /// [6009] Fee withdrawal exceeds the collected fees.
    #[msg("Cannot withdraw more than collected fees")]
    InsufficientFees,

    /// [6010] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6011-6013) ==========

    /// [6011] Caller is not the registry owner.
    #[msg("Unauthorized: caller is not the owner")]
    Unauthorized,

    /// [6012] Deposit record does not belong to the signer.
    #[msg("Unauthorized: deposit record belongs to another depositor")]
    NotDepositOwner,

    /// [6013] The chef is not an authorized minter of the reward mint.
    #[msg("Unauthorized: chef is not a minter of the reward token")]
    MintUnauthorized,

    // ========== Account Validation / Transfer Errors (6014-6018) ==========

    /// [6014] Token account mint does not match the pool's staking mint.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6015] The provided vault does not match the pool's vault.
    #[msg("Staking vault address mismatch")]
    VaultMismatch,

    /// [6016] The provided mint does not match the chef's reward mint.
    #[msg("Reward mint mismatch")]
    RewardMintMismatch,

    /// [6017] Deposit record does not belong to this pool.
    #[msg("Deposit record does not belong to this pool")]
    DepositPoolMismatch,

    /// [6018] The staking asset rejected the movement.
    #[msg("Staking asset transfer failed")]
    TransferFailed,
}
