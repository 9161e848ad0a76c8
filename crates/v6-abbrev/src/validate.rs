//! Structural validation of a bare address (no prefix, no `::`).

use v6_core::{InvalidAddress, GROUP_COUNT, MAX_GROUP_LEN};

/// True when `address` is exactly 8 colon-separated groups of 0-4 hex digits.
pub fn validate(address: &str) -> bool {
    check(address).is_ok()
}

/// Like [`validate`], but says what is wrong.
pub fn check(address: &str) -> Result<(), InvalidAddress> {
    parse_groups(address).map(|_| ())
}

/// Split into the 8 raw groups, rejecting anything malformed.
pub fn parse_groups(address: &str) -> Result<Vec<&str>, InvalidAddress> {
    let groups: Vec<&str> = address.split(':').collect();
    if groups.len() != GROUP_COUNT {
        tracing::debug!(address, found = groups.len(), "rejected address: group count");
        return Err(InvalidAddress::group_count(address, groups.len()));
    }
    if let Some((index, group)) = groups.iter().enumerate().find(|(_, g)| !is_hex_group(g)) {
        tracing::debug!(address, index, group = *group, "rejected address: bad group");
        return Err(InvalidAddress::hex_group(address, index, *group));
    }
    Ok(groups)
}

/// An empty group is accepted and reads as zero.
pub fn is_hex_group(group: &str) -> bool {
    group.len() <= MAX_GROUP_LEN && group.bytes().all(|b| b.is_ascii_hexdigit())
}
