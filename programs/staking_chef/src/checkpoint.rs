use anchor_lang::prelude::*;

/// Block height and wall-clock time, sampled once per instruction and held
/// fixed for every computation inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkpoint {
    /// Current slot, used as the reward block height.
    pub block: u64,
    /// Current unix timestamp, used for lock expiry.
    pub timestamp: i64,
}

impl Checkpoint {
    pub fn new(block: u64, timestamp: i64) -> Self {
        Self { block, timestamp }
    }

    /// Reads the clock sysvar.
    pub fn current() -> Result<Self> {
        let clock = Clock::get()?;
        Ok(Self::new(clock.slot, clock.unix_timestamp))
    }
}
