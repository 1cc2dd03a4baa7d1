//! Time interning for compact, hashable DP states.
//!
//! Maps every distinct time value to a dense rank that preserves ordering,
//! so room free-times can be stored and compared as small integers.

use rustc_hash::FxHashMap;

use crate::models::Interval;

/// Interned time value. Ranks start at 1; 0 is reserved for [`FREE_FROM_START`].
pub type TimeRank = u32;

/// Sentinel rank for a room that has hosted nothing yet, or whose last
/// occupant ends before every interval still to come.
pub const FREE_FROM_START: TimeRank = 0;

/// Order-preserving interner for interval endpoints.
#[derive(Debug, Clone)]
pub struct TimeInterner {
    /// Keyed by `f64::to_bits` of the canonicalized time.
    to_rank: FxHashMap<u64, TimeRank>,
}

/// Fold -0.0 into 0.0 so both hash to the same key.
#[inline]
fn canonical(t: f64) -> f64 {
    t + 0.0
}

impl TimeInterner {
    /// Intern all starts and ends of `intervals`.
    ///
    /// Times must be finite; callers validate before interning.
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        let mut times: Vec<f64> = intervals
            .iter()
            .flat_map(|iv| [canonical(iv.start), canonical(iv.end)])
            .collect();
        times.sort_by(f64::total_cmp);
        times.dedup();

        let mut to_rank =
            FxHashMap::with_capacity_and_hasher(times.len(), Default::default());
        for (i, t) in times.iter().enumerate() {
            to_rank.insert(t.to_bits(), i as TimeRank + 1);
        }

        Self { to_rank }
    }

    /// Rank of a time that was interned, if any.
    #[inline]
    pub fn rank(&self, t: f64) -> Option<TimeRank> {
        self.to_rank.get(&canonical(t).to_bits()).copied()
    }

    /// Number of distinct interned times.
    pub fn len(&self) -> usize {
        self.to_rank.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_preserve_order() {
        let intervals = vec![
            Interval::new(4.0, 6.0, 1.0),
            Interval::new(1.0, 3.0, 1.0),
            Interval::new(2.5, 4.0, 1.0),
        ];
        let interner = TimeInterner::from_intervals(&intervals);

        assert_eq!(interner.len(), 5);
        assert_eq!(interner.rank(1.0), Some(1));
        assert_eq!(interner.rank(2.5), Some(2));
        assert_eq!(interner.rank(3.0), Some(3));
        assert_eq!(interner.rank(4.0), Some(4)); // shared endpoint, one rank
        assert_eq!(interner.rank(6.0), Some(5));
        assert_eq!(interner.rank(5.0), None);
    }

    #[test]
    fn test_ranks_stay_above_sentinel() {
        let intervals = vec![Interval::new(-2.0, 7.5, 1.0)];
        let interner = TimeInterner::from_intervals(&intervals);

        assert_eq!(interner.rank(-2.0), Some(1));
        assert!(interner.rank(-2.0).unwrap() > FREE_FROM_START);
        assert_eq!(interner.rank(7.5), Some(2));
    }

    #[test]
    fn test_negative_zero_shares_rank() {
        let intervals = vec![
            Interval::new(-0.0, 1.0, 1.0),
            Interval::new(-1.0, 0.0, 1.0),
        ];
        let interner = TimeInterner::from_intervals(&intervals);

        assert_eq!(interner.len(), 3);
        assert_eq!(interner.rank(0.0), interner.rank(-0.0));
    }

    #[test]
    fn test_empty() {
        let interner = TimeInterner::from_intervals(&[]);
        assert_eq!(interner.len(), 0);
        assert_eq!(interner.rank(0.0), None);
    }
}
