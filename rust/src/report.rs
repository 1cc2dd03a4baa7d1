//! Plain-text rendering of a schedule.

use std::fmt::Write;

use crate::models::{Interval, ScheduleResult};
use crate::sorting::start_time_order;

/// Render a per-interval listing, a per-room timeline and the total profit.
///
/// `result` must come from scheduling exactly these `intervals`.
pub fn render_report(intervals: &[Interval], result: &ScheduleResult) -> String {
    let mut out = String::new();

    out.push_str("Scheduled intervals:\n");
    for (index, interval) in intervals.iter().enumerate() {
        let room = match result.room_of(index) {
            Some(room) => room.to_string(),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "  #{:<3} start={:<6} end={:<6} profit={:<8} assigned={:<5} room={}",
            index,
            interval.start,
            interval.end,
            interval.profit,
            result.is_assigned(index),
            room
        );
    }

    let room_count = result.assignments.iter().map(|a| a.room).max().unwrap_or(0);
    if room_count > 0 {
        out.push_str("\nRooms:\n");
    }
    for room in 1..=room_count {
        let occupants = start_time_order(intervals, &result.room_occupants(room));
        let timeline: Vec<String> = occupants
            .iter()
            .map(|&i| format!("#{} [{}, {})", i, intervals[i].start, intervals[i].end))
            .collect();
        let _ = writeln!(out, "  Room {}: {}", room, timeline.join(" "));
    }

    let _ = writeln!(out, "\nTotal profit: {}", result.total_profit);
    out
}
