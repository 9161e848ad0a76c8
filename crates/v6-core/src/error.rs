use thiserror::Error;

/// Why an address failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedAddress {
    #[error("expected 8 groups, found {found}")]
    MalformedGroupCount { found: usize },
    #[error("group {index} is not 1-4 hex digits: {group:?}")]
    MalformedHexGroup { index: usize, group: String },
}

/// The single failure the engine reports to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid IPv6 address {input:?}: {reason}")]
pub struct InvalidAddress {
    pub input: String,
    pub reason: MalformedAddress,
}

impl InvalidAddress {
    pub fn new(input: impl Into<String>, reason: MalformedAddress) -> Self {
        Self { input: input.into(), reason }
    }

    pub fn group_count(input: impl Into<String>, found: usize) -> Self {
        Self::new(input, MalformedAddress::MalformedGroupCount { found })
    }

    pub fn hex_group(input: impl Into<String>, index: usize, group: impl Into<String>) -> Self {
        Self::new(input, MalformedAddress::MalformedHexGroup { index, group: group.into() })
    }
}

#[derive(Error, Debug)]
pub enum V6Error {
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),
    #[error("Unknown strategy: {0} (expected rightmost or leftmost)")]
    UnknownStrategy(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, V6Error>;
