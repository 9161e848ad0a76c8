//! Abbreviation pipeline — orchestrates validation, normalization, run
//! selection and compression.

use crate::{compress, expand, normalize, prefix, zero_run};
use v6_core::{AbbreviationConfig, Comparison, InvalidAddress, Strategy};

/// Demonstration inputs; each shows how the strategies relate.
pub const SAMPLE_ADDRESSES: &[&str] = &[
    "2001:0000:0000:0db8:0000:0000:0db8:0001/64",
    "2001:0db8:0000:0000:0001:0000:0000:0001/64",
    "fe80:0000:0000:0001:0000:0000:0001:0001/64",
    "2001:0000:0000:0042:0000:0000:0000:7334/64",
    "fc00:0000:0000:0000:0001:0000:0000:0000/7",
];

/// Abbreviate a bare address (no `/prefix`).
pub fn abbreviate_address(address: &str, strategy: Strategy) -> Result<String, InvalidAddress> {
    let groups = normalize::normalize_address(address.trim())?;
    let run = zero_run::find_run(&groups, strategy);
    let abbreviated = compress::compress(&groups, run);
    tracing::debug!(address, %strategy, ?run, %abbreviated, "abbreviated address");
    Ok(abbreviated)
}

/// Abbreviate `input`, which may carry a `/prefix` suffix.
pub fn abbreviate(input: &str, strategy: Strategy) -> Result<String, InvalidAddress> {
    prefix::process(input, strategy)
}

/// Abbreviate `input` under both strategies.
pub fn compare(input: &str) -> Result<Comparison, InvalidAddress> {
    Ok(Comparison {
        input: input.trim().to_string(),
        rightmost: abbreviate(input, Strategy::Rightmost)?,
        leftmost: abbreviate(input, Strategy::Leftmost)?,
    })
}

/// Abbreviation engine bound to a tie-break strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abbreviator {
    pub strategy: Strategy,
}

impl Abbreviator {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn rightmost() -> Self { Self::new(Strategy::Rightmost) }
    pub fn leftmost() -> Self { Self::new(Strategy::Leftmost) }

    pub fn from_config(config: &AbbreviationConfig) -> Self {
        Self::new(config.strategy)
    }

    pub fn abbreviate(&self, input: &str) -> Result<String, InvalidAddress> {
        abbreviate(input, self.strategy)
    }

    /// Expansion does not depend on the strategy; provided for symmetry.
    pub fn expand(&self, input: &str) -> Result<String, InvalidAddress> {
        expand::expand(input)
    }

    pub fn compare(&self, input: &str) -> Result<Comparison, InvalidAddress> {
        compare(input)
    }
}
