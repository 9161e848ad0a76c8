//! Routing-prefix handling (`addr/64`).

use crate::pipeline::abbreviate_address;
use v6_core::{InvalidAddress, Strategy};

pub const PREFIX_SEPARATOR: char = '/';

/// Split at the first `/`. Both sides are trimmed; the prefix is not validated.
pub fn split_prefix(input: &str) -> (&str, Option<&str>) {
    let input = input.trim();
    match input.split_once(PREFIX_SEPARATOR) {
        Some((address, prefix)) => (address.trim(), Some(prefix.trim())),
        None => (input, None),
    }
}

pub fn attach_prefix(address: String, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{address}{PREFIX_SEPARATOR}{prefix}"),
        None => address,
    }
}

/// Abbreviate the address part and reattach the prefix unchanged.
pub fn process(input: &str, strategy: Strategy) -> Result<String, InvalidAddress> {
    let (address, prefix) = split_prefix(input);
    let abbreviated = abbreviate_address(address, strategy)?;
    Ok(attach_prefix(abbreviated, prefix))
}
