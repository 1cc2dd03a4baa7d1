//! Interval orderings used by the scheduler.
//!
//! Both orderings are explicit sort-by-key steps over interval indices and
//! always fall back to the original index, so equal keys never reorder
//! nondeterministically.

use std::cmp::Ordering;

use crate::models::Interval;

/// Compare finite times, treating -0.0 and 0.0 as equal.
#[inline]
fn cmp_time(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Indices sorted by (end, start, index). This is the DP processing order.
pub fn end_time_order(intervals: &[Interval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| {
        let (ia, ib) = (&intervals[a], &intervals[b]);
        cmp_time(ia.end, ib.end)
            .then_with(|| cmp_time(ia.start, ib.start))
            .then(a.cmp(&b))
    });
    order
}

/// Indices sorted by (start, end, index). This is the room sweep order.
pub fn start_time_order(intervals: &[Interval], indices: &[usize]) -> Vec<usize> {
    let mut order = indices.to_vec();
    order.sort_by(|&a, &b| {
        let (ia, ib) = (&intervals[a], &intervals[b]);
        cmp_time(ia.start, ib.start)
            .then_with(|| cmp_time(ia.end, ib.end))
            .then(a.cmp(&b))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> Interval {
        Interval::new(start, end, 1.0)
    }

    #[test]
    fn test_end_time_order_breaks_ties_by_start_then_index() {
        let intervals = vec![
            iv(1.0, 3.0), // 0
            iv(2.0, 5.0), // 1
            iv(4.0, 6.0), // 2
            iv(6.0, 8.0), // 3
            iv(1.0, 3.0), // 4
            iv(0.0, 3.0), // 5
        ];
        assert_eq!(end_time_order(&intervals), vec![5, 0, 4, 1, 2, 3]);
    }

    #[test]
    fn test_start_time_order_on_subset() {
        let intervals = vec![iv(4.0, 6.0), iv(1.0, 3.0), iv(1.0, 2.0), iv(0.0, 9.0)];
        assert_eq!(start_time_order(&intervals, &[0, 1, 2]), vec![2, 1, 0]);
        assert_eq!(start_time_order(&intervals, &[]), Vec::<usize>::new());
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let intervals = vec![iv(0.0, 1.0), iv(-0.0, 1.0)];
        assert_eq!(end_time_order(&intervals), vec![0, 1]);
        assert_eq!(start_time_order(&intervals, &[1, 0]), vec![0, 1]);
    }
}
