pub mod config;
pub mod error;
pub mod types;

pub use config::{AbbreviationConfig, LoggingConfig, V6Config};
pub use error::{InvalidAddress, MalformedAddress, Result, V6Error};
pub use types::{Comparison, Strategy, ZeroRun, GROUP_COUNT, MAX_GROUP_LEN, MIN_RUN_LEN};

#[cfg(test)]
mod tests;
