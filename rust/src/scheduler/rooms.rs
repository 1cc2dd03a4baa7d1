//! Room occupancy: overlap depth and concrete room assignment.

use crate::models::Interval;
use crate::sorting::start_time_order;

use super::core::SchedulerError;

/// Maximum number of intervals in progress at any single instant.
///
/// A room is free again at its occupant's end time, so at equal times ends
/// are processed before starts.
pub fn max_overlap(intervals: &[Interval]) -> usize {
    let mut events: Vec<(f64, i32)> = Vec::with_capacity(intervals.len() * 2);
    for iv in intervals {
        events.push((iv.start + 0.0, 1));
        events.push((iv.end + 0.0, -1));
    }
    events.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut depth: i32 = 0;
    let mut max_depth: i32 = 0;
    for (_, delta) in events {
        depth += delta;
        max_depth = max_depth.max(depth);
    }
    max_depth as usize
}

/// Timeline of one room during the start-order sweep.
#[derive(Clone, Debug)]
struct RoomTimeline {
    /// 1-based room number
    room: usize,
    /// End of the latest occupant (None = never used)
    free_at: Option<f64>,
}

impl RoomTimeline {
    fn is_free_at(&self, t: f64) -> bool {
        self.free_at.map_or(true, |free| free <= t)
    }
}

/// Give each selected interval a room, lowest-numbered free room first.
///
/// `selected` must never overlap more than `room_count` deep, which holds for
/// every selection the DP produces. Returns a per-interval room lookup over
/// all of `intervals` (`None` for intervals not in `selected`).
pub fn assign_rooms(
    intervals: &[Interval],
    selected: &[usize],
    room_count: usize,
) -> Result<Vec<Option<usize>>, SchedulerError> {
    let mut rooms: Vec<RoomTimeline> = (1..=room_count)
        .map(|room| RoomTimeline {
            room,
            free_at: None,
        })
        .collect();
    let mut room_of: Vec<Option<usize>> = vec![None; intervals.len()];

    for index in start_time_order(intervals, selected) {
        let interval = &intervals[index];
        let timeline = rooms
            .iter_mut()
            .find(|r| r.is_free_at(interval.start))
            .ok_or_else(|| {
                SchedulerError::Internal(format!(
                    "no free room for selected interval {} at {}",
                    index, interval.start
                ))
            })?;
        timeline.free_at = Some(interval.end);
        room_of[index] = Some(timeline.room);
    }

    Ok(room_of)
}
