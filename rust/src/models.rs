//! Core data types for room scheduling.

use pyo3::prelude::*;

/// A resource-occupying task with a value for hosting it.
///
/// Identity is positional: two intervals with identical fields are still
/// distinct if they sit at different indices of the input.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    #[pyo3(get)]
    pub start: f64,
    #[pyo3(get)]
    pub end: f64,
    #[pyo3(get)]
    pub profit: f64,
}

impl Interval {
    /// Whether the two intervals share any instant. Touching endpoints do not.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[pymethods]
impl Interval {
    #[new]
    pub fn new(start: f64, end: f64, profit: f64) -> Self {
        Self { start, end, profit }
    }

    fn __repr__(&self) -> String {
        format!(
            "Interval(start={}, end={}, profit={})",
            self.start, self.end, self.profit
        )
    }
}

/// One interval placed in one room. Rooms are numbered from 1.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    #[pyo3(get)]
    pub interval_index: usize,
    #[pyo3(get)]
    pub room: usize,
}

#[pymethods]
impl Assignment {
    fn __repr__(&self) -> String {
        format!(
            "Assignment(interval_index={}, room={})",
            self.interval_index, self.room
        )
    }
}

/// Outcome of a scheduling run.
///
/// `assignments` is ordered by interval index and `unassigned` is ascending;
/// together they cover every input index exactly once.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleResult {
    #[pyo3(get)]
    pub assignments: Vec<Assignment>,
    #[pyo3(get)]
    pub unassigned: Vec<usize>,
    #[pyo3(get)]
    pub total_profit: f64,
}

impl ScheduleResult {
    /// Build a result from a per-interval room lookup (`None` = rejected).
    pub(crate) fn from_room_map(intervals: &[Interval], rooms: &[Option<usize>]) -> Self {
        let mut assignments = Vec::new();
        let mut unassigned = Vec::new();
        let mut total_profit = 0.0;

        for (interval_index, (interval, room)) in intervals.iter().zip(rooms).enumerate() {
            match room {
                Some(room) => {
                    assignments.push(Assignment {
                        interval_index,
                        room: *room,
                    });
                    total_profit += interval.profit;
                }
                None => unassigned.push(interval_index),
            }
        }

        Self {
            assignments,
            unassigned,
            total_profit,
        }
    }
}

#[pymethods]
impl ScheduleResult {
    /// Room hosting the interval at `index`, if it was assigned.
    pub fn room_of(&self, index: usize) -> Option<usize> {
        self.assignments
            .binary_search_by_key(&index, |a| a.interval_index)
            .ok()
            .map(|pos| self.assignments[pos].room)
    }

    pub fn is_assigned(&self, index: usize) -> bool {
        self.room_of(index).is_some()
    }

    /// Interval indices hosted by `room`, in index order.
    pub fn room_occupants(&self, room: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .filter(|a| a.room == room)
            .map(|a| a.interval_index)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(assigned={}, unassigned={}, total_profit={})",
            self.assignments.len(),
            self.unassigned.len(),
            self.total_profit
        )
    }
}
