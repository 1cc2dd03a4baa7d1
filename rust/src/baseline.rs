//! First-fit room assignment, kept as a comparison baseline.
//!
//! Intervals are taken in end-time order (stable, so equal ends keep input
//! order) and each goes to the first room whose last occupant has finished by
//! its start; if every room is busy the interval is rejected. This always
//! yields a feasible schedule but not necessarily the most profitable one:
//! an early cheap interval can take the room a later expensive one needed.

use crate::models::{Interval, ScheduleResult};
use crate::scheduler::SchedulerError;
use crate::validation::{validate_intervals, validate_room_count};

/// Greedy first-fit schedule. Validates inputs exactly like the exact scheduler.
pub fn first_fit_schedule(
    intervals: &[Interval],
    room_count: usize,
) -> Result<ScheduleResult, SchedulerError> {
    validate_room_count(room_count)?;
    validate_intervals(intervals)?;

    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| intervals[a].end.total_cmp(&intervals[b].end));

    // first-fit opens room r only when r - 1 rooms are busy, so it never
    // needs more rooms than there are intervals
    let mut last_end: Vec<Option<f64>> = vec![None; room_count.min(intervals.len())];
    let mut rooms: Vec<Option<usize>> = vec![None; intervals.len()];

    for index in order {
        let interval = &intervals[index];
        let free_room = last_end
            .iter()
            .position(|end| end.map_or(true, |e| e <= interval.start));
        if let Some(slot) = free_room {
            last_end[slot] = Some(interval.end);
            rooms[index] = Some(slot + 1);
        }
    }

    Ok(ScheduleResult::from_room_map(intervals, &rooms))
}
