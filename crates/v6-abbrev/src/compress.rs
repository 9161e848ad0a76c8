//! Reassembly around the `::` elision marker.

use v6_core::ZeroRun;

/// Elision marker.
pub const ELISION: &str = "::";

pub(crate) fn join<S: AsRef<str>>(groups: &[S]) -> String {
    groups.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(":")
}

/// Replace `run` with `::`. With no eligible run the groups are joined as-is.
///
/// An empty side simply disappears, so a run touching either end yields
/// `a::` / `::b`, and a run covering every group yields `::`.
pub fn compress<S: AsRef<str>>(groups: &[S], run: Option<ZeroRun>) -> String {
    match run.filter(|r| r.is_eligible() && r.end() <= groups.len()) {
        Some(run) => {
            let range = run.range();
            let left = join(&groups[..range.start]);
            let right = join(&groups[range.end..]);
            format!("{left}{ELISION}{right}")
        }
        None => join(groups),
    }
}
