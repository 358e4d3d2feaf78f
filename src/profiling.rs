//! Simple dispatch counters for understanding which policy operations run.
//!
//! Counting is compiled in only with the `profiling` cargo feature. Without
//! it [`record`] is empty and [`count`] always reports zero, so adaptors cost
//! nothing beyond the policy call itself.

use crate::error::Operation;

#[cfg(feature = "profiling")]
mod counters {
    use std::sync::atomic::AtomicU64;
    use std::sync::atomic::Ordering;

    use crate::error::Operation;

    static DISPATCHES: [AtomicU64; 7] = [
        AtomicU64::new(0),
        AtomicU64::new(0),
        AtomicU64::new(0),
        AtomicU64::new(0),
        AtomicU64::new(0),
        AtomicU64::new(0),
        AtomicU64::new(0),
    ];

    #[inline]
    pub fn record(op: Operation) {
        DISPATCHES[op.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(op: Operation) -> u64 {
        return DISPATCHES[op.index()].load(Ordering::Relaxed);
    }

    pub fn reset() {
        for counter in &DISPATCHES {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Record one policy dispatch.
#[inline(always)]
pub fn record(op: Operation) {
    #[cfg(feature = "profiling")]
    counters::record(op);
    #[cfg(not(feature = "profiling"))]
    let _ = op;
}

/// Number of dispatches of `op` since the last [`reset`].
pub fn count(op: Operation) -> u64 {
    #[cfg(feature = "profiling")]
    return counters::count(op);
    #[cfg(not(feature = "profiling"))]
    {
        let _ = op;
        return 0;
    }
}

/// Zero every counter.
pub fn reset() {
    #[cfg(feature = "profiling")]
    counters::reset();
}

/// One line summary, e.g. `dereference: 3, increment: 2, ...`.
pub fn report() -> String {
    let parts: Vec<String> = Operation::ALL
        .iter()
        .map(|op| format!("{}: {}", op, count(*op)))
        .collect();
    return parts.join(", ");
}

#[cfg(all(test, feature = "profiling"))]
mod tests {
    use super::*;

    // Counters are global, so everything runs in one test to avoid races
    // with the parallel test runner.
    #[test]
    fn record_count_reset() {
        reset();
        record(Operation::Increment);
        record(Operation::Increment);
        record(Operation::Less);
        assert!(count(Operation::Increment) >= 2);
        assert!(count(Operation::Less) >= 1);
        assert_eq!(report().split(", ").count(), Operation::ALL.len());
    }
}
