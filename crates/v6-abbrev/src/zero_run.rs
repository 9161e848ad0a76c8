//! Zero-run detection and strategy-driven selection.

use crate::normalize::ZERO_GROUP;
use v6_core::{Strategy, ZeroRun};

/// Every run of at least two canonical zero groups, left to right.
pub fn zero_runs<S: AsRef<str>>(groups: &[S]) -> Vec<ZeroRun> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < groups.len() {
        if groups[i].as_ref() != ZERO_GROUP {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i].as_ref() == ZERO_GROUP {
            i += 1;
        }
        let run = ZeroRun::new(start, i - start);
        if run.is_eligible() {
            runs.push(run);
        }
    }
    runs
}

/// Pick the run to elide. Among runs of equal maximal length, `Rightmost`
/// keeps the last one and `Leftmost` the first.
pub fn find_run<S: AsRef<str>>(groups: &[S], strategy: Strategy) -> Option<ZeroRun> {
    let best = zero_runs(groups).into_iter().fold(None, |best: Option<ZeroRun>, run| {
        let best_len = best.map_or(0, |b| b.len);
        if strategy.prefers(run.len, best_len) {
            Some(run)
        } else {
            best
        }
    });
    tracing::trace!(%strategy, ?best, "selected zero run");
    best
}
