//! IPv6 abbreviation engine — staged zero compression with a selectable tie-break.
//!
//! Stages:
//! 1. Prefix split (`addr/64` keeps `/64` verbatim)
//! 2. Validation — exactly 8 groups of at most 4 hex digits
//! 3. Group normalization — lowercase, strip leading zeros
//! 4. Zero-run selection — rightmost or leftmost among the longest runs
//! 5. Compression — replace the selected run with `::`
//!
//! [`expand`] reverses the last stage.

pub mod compress;
pub mod expand;
pub mod normalize;
pub mod pipeline;
pub mod prefix;
pub mod validate;
pub mod zero_run;

pub use expand::{expand, expand_groups};
pub use pipeline::{abbreviate, abbreviate_address, compare, Abbreviator, SAMPLE_ADDRESSES};
pub use v6_core::{Comparison, InvalidAddress, MalformedAddress, Strategy, ZeroRun};
pub use validate::validate;
