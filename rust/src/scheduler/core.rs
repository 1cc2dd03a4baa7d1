//! Exact multi-room interval scheduler.

use thiserror::Error;

use crate::config::SchedulerConfig;
use crate::interner::{TimeInterner, TimeRank};
use crate::models::{Interval, ScheduleResult};
use crate::sorting::end_time_order;
use crate::validation::{validate_intervals, validate_room_count};
use crate::{log_steps, log_summary};

use super::rooms::{assign_rooms, max_overlap};
use super::state::{Event, Frontier};

/// Errors that can occur during scheduling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid interval {index}: {reason}")]
    InvalidInterval { index: usize, reason: String },
    #[error("Search frontier grew to {states} states, over the limit of {limit}")]
    ResourceExceeded { limit: usize, states: usize },
    #[error("Internal scheduler error: {0}")]
    Internal(String),
}

/// Profit-maximizing assignment of intervals to interchangeable rooms.
///
/// Intervals are processed in end-time order while a frontier of
/// room-occupancy states is carried forward. Each state either skips the
/// next interval or places it in one of its rooms that is already free.
/// States with the same free-times are merged, and states beaten on both
/// value and room availability are pruned. The surviving best state is an
/// exact optimum.
pub struct RoomScheduler {
    intervals: Vec<Interval>,
    room_count: usize,
    config: SchedulerConfig,
}

impl RoomScheduler {
    /// Validate inputs and create a scheduler.
    ///
    /// The room count is checked before any interval.
    pub fn new(
        intervals: Vec<Interval>,
        room_count: usize,
        config: SchedulerConfig,
    ) -> Result<Self, SchedulerError> {
        validate_room_count(room_count)?;
        config.validate()?;
        validate_intervals(&intervals)?;

        Ok(Self {
            intervals,
            room_count,
            config,
        })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn room_count(&self) -> usize {
        self.room_count
    }

    /// Run the scheduling algorithm.
    pub fn schedule(&self) -> Result<ScheduleResult, SchedulerError> {
        let verbosity = self.config.verbosity;
        if self.intervals.is_empty() {
            return Ok(ScheduleResult::default());
        }

        // Rooms beyond the deepest overlap can never all be busy at once.
        let effective_rooms = self.room_count.min(max_overlap(&self.intervals));
        log_summary!(
            verbosity,
            "scheduling {} intervals on {} rooms ({} effective)",
            self.intervals.len(),
            self.room_count,
            effective_rooms
        );

        let interner = TimeInterner::from_intervals(&self.intervals);
        log_summary!(verbosity, "{} distinct time points", interner.len());
        let events = self.build_events(&interner)?;
        let horizons = remaining_start_horizons(&events);

        let mut frontier = Frontier::new(effective_rooms, self.intervals.len());
        for (pos, event) in events.iter().enumerate() {
            frontier.advance(
                event,
                horizons[pos + 1],
                self.config.max_frontier_states,
                verbosity,
            )?;
            log_steps!(
                verbosity,
                "after #{} ({}/{}): frontier={}",
                event.index,
                pos + 1,
                events.len(),
                frontier.len()
            );
        }

        let best = frontier
            .best()
            .ok_or_else(|| SchedulerError::Internal("empty frontier".to_string()))?;
        let selected: Vec<usize> = best.selection.iter().collect();
        // The lowest-free-room sweep never opens more rooms than the selection
        // overlaps deep, so the effective count yields the same room numbers.
        let rooms = assign_rooms(&self.intervals, &selected, effective_rooms)?;
        let result = ScheduleResult::from_room_map(&self.intervals, &rooms);

        log_summary!(
            verbosity,
            "selected {} of {} intervals, total profit {}",
            result.assignments.len(),
            self.intervals.len(),
            result.total_profit
        );
        Ok(result)
    }

    /// Intervals in end-time order with interned endpoints.
    fn build_events(&self, interner: &TimeInterner) -> Result<Vec<Event>, SchedulerError> {
        end_time_order(&self.intervals)
            .into_iter()
            .map(|index| {
                let interval = &self.intervals[index];
                let rank = |t: f64| {
                    interner.rank(t).ok_or_else(|| {
                        SchedulerError::Internal(format!("time {} was not interned", t))
                    })
                };
                Ok(Event {
                    index,
                    start: rank(interval.start)?,
                    end: rank(interval.end)?,
                    profit: interval.profit,
                })
            })
            .collect()
    }
}

/// `horizons[p]` is the smallest start rank among `events[p..]`, with
/// `TimeRank::MAX` once nothing remains.
fn remaining_start_horizons(events: &[Event]) -> Vec<TimeRank> {
    let mut horizons = vec![TimeRank::MAX; events.len() + 1];
    for pos in (0..events.len()).rev() {
        horizons[pos] = horizons[pos + 1].min(events[pos].start);
    }
    horizons
}

/// Schedule `intervals` on `room_count` rooms with the default configuration.
pub fn schedule(
    intervals: &[Interval],
    room_count: usize,
) -> Result<ScheduleResult, SchedulerError> {
    schedule_with_config(intervals, room_count, &SchedulerConfig::default())
}

/// Schedule `intervals` on `room_count` rooms.
pub fn schedule_with_config(
    intervals: &[Interval],
    room_count: usize,
    config: &SchedulerConfig,
) -> Result<ScheduleResult, SchedulerError> {
    RoomScheduler::new(intervals.to_vec(), room_count, config.clone())?.schedule()
}
