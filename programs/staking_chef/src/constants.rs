//! Program constants for the Staking Chef program.
//!
//! PDA seeds and the fixed denominators used by the fee and reward math.

/// Seed for deriving the chef (registry) PDA, one per reward mint
pub const CHEF_SEED: &[u8] = b"chef";

/// Seed for deriving pool PDAs
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving the per-pool custody vault PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for deriving user deposit record PDAs
pub const DEPOSIT_SEED: &[u8] = b"deposit";

/// Per-mille denominator for deposit fees (1000 = 100%)
pub const FEE_DENOMINATOR: u64 = 1_000;

/// Highest deposit fee a pool may carry (100%)
pub const MAX_DEPOSIT_FEE_PER_MILLE: u16 = 1_000;
