//! Group normalization.

use crate::validate;
use v6_core::InvalidAddress;

/// Canonical zero group.
pub const ZERO_GROUP: &str = "0";

/// Strip leading zeros; all-zero and empty groups become `"0"`.
///
/// Expects an already lowercased group.
pub fn normalize(group: &str) -> String {
    let stripped = group.trim_start_matches('0');
    if stripped.is_empty() {
        ZERO_GROUP.to_string()
    } else {
        stripped.to_string()
    }
}

/// Lowercase the whole address once, validate it, and normalize every group.
pub fn normalize_address(address: &str) -> Result<Vec<String>, InvalidAddress> {
    let lowered = address.to_ascii_lowercase();
    let groups = validate::parse_groups(&lowered)
        .map_err(|e| InvalidAddress::new(address, e.reason))?;
    Ok(groups.into_iter().map(normalize).collect())
}
