use crate::error::V6Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Number of 16-bit groups in an IPv6 address.
pub const GROUP_COUNT: usize = 8;

/// Longest textual group accepted, leading zeros included.
pub const MAX_GROUP_LEN: usize = 4;

/// Shortest zero run eligible for `::` elision.
pub const MIN_RUN_LEN: usize = 2;

/// Tie-break policy between zero runs of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Last of the longest runs wins (RFC 5952 style placement).
    #[default]
    Rightmost,
    /// First of the longest runs wins.
    Leftmost,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Rightmost, Strategy::Leftmost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rightmost => "rightmost",
            Self::Leftmost => "leftmost",
        }
    }

    /// Whether a candidate run of `len` groups displaces the best run so far.
    pub fn prefers(&self, len: usize, best_len: usize) -> bool {
        match self {
            Self::Rightmost => len >= best_len,
            Self::Leftmost => len > best_len,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = V6Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rightmost" | "right" => Ok(Self::Rightmost),
            "leftmost" | "left" => Ok(Self::Leftmost),
            _ => Err(V6Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Half-open run `[start, start + len)` of zero groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroRun {
    pub start: usize,
    pub len: usize,
}

impl ZeroRun {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Saturates instead of overflowing for out-of-range runs.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_eligible(&self) -> bool {
        self.len >= MIN_RUN_LEN
    }
}

/// One input abbreviated under both strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub input: String,
    pub rightmost: String,
    pub leftmost: String,
}

impl Comparison {
    /// True when the strategies placed `::` differently.
    pub fn diverges(&self) -> bool {
        self.rightmost != self.leftmost
    }
}
