//! Expansion of an abbreviated address back to 8 full groups.

use crate::compress::{join, ELISION};
use crate::normalize::{normalize, ZERO_GROUP};
use crate::prefix::{attach_prefix, split_prefix};
use crate::validate::is_hex_group;
use v6_core::{InvalidAddress, GROUP_COUNT, MAX_GROUP_LEN};

fn split_side(side: &str) -> Vec<&str> {
    if side.is_empty() {
        Vec::new()
    } else {
        side.split(':').collect()
    }
}

/// Fill in the groups elided by `::` and normalize all 8 of them.
///
/// Accepts at most one `::`, which must stand for at least one group, and no
/// empty groups beside it. A bare 8-group address passes straight through,
/// empty groups included.
pub fn expand_groups(address: &str) -> Result<Vec<String>, InvalidAddress> {
    let lowered = address.trim().to_ascii_lowercase();

    let raw: Vec<&str> = match lowered.split_once(ELISION) {
        None => lowered.split(':').collect(),
        Some((left, right)) => {
            if right.contains(ELISION) {
                return Err(InvalidAddress::group_count(address, lowered.split(':').count()));
            }
            let left = split_side(left);
            let right = split_side(right);
            // `:::` or a stray edge colon around `::` leaves an empty group.
            if left.iter().chain(&right).any(|g| g.is_empty()) {
                return Err(InvalidAddress::group_count(address, lowered.split(':').count()));
            }
            let present = left.len() + right.len();
            if present >= GROUP_COUNT {
                return Err(InvalidAddress::group_count(address, present));
            }
            let mut groups = left;
            groups.resize(GROUP_COUNT - right.len(), ZERO_GROUP);
            groups.extend(right);
            groups
        }
    };

    if raw.len() != GROUP_COUNT {
        return Err(InvalidAddress::group_count(address, raw.len()));
    }
    if let Some((index, group)) = raw.iter().enumerate().find(|(_, g)| !is_hex_group(g)) {
        return Err(InvalidAddress::hex_group(address, index, *group));
    }
    Ok(raw.into_iter().map(normalize).collect())
}

/// Expand to the full zero-padded form, e.g. `2001::1` becomes
/// `2001:0000:0000:0000:0000:0000:0000:0001`. A `/prefix` is kept as-is.
pub fn expand(input: &str) -> Result<String, InvalidAddress> {
    let (address, prefix) = split_prefix(input);
    let padded: Vec<String> = expand_groups(address)?
        .iter()
        .map(|g| format!("{g:0>width$}", width = MAX_GROUP_LEN))
        .collect();
    Ok(attach_prefix(join(&padded), prefix))
}
