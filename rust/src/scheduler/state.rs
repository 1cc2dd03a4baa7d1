//! DP frontier over room-occupancy states.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;

use crate::interner::{TimeRank, FREE_FROM_START};
use crate::log_states;

use super::core::SchedulerError;
use super::selection::SelectionMask;

/// One interval in DP processing order, with interned endpoints.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    /// Original position in the caller's input
    pub index: usize,
    pub start: TimeRank,
    pub end: TimeRank,
    pub profit: f64,
}

/// A partial schedule over a prefix of the events.
///
/// Rooms are interchangeable, so only the sorted multiset of their free-times
/// matters for what can still be scheduled.
#[derive(Clone, Debug)]
pub struct RoomState {
    /// Free-time rank per room, ascending
    pub free_at: Box<[TimeRank]>,
    pub profit: f64,
    pub selection: SelectionMask,
}

impl RoomState {
    /// Every room free, nothing selected.
    pub fn initial(rooms: usize, interval_count: usize) -> Self {
        Self {
            free_at: vec![FREE_FROM_START; rooms].into_boxed_slice(),
            profit: 0.0,
            selection: SelectionMask::with_len(interval_count),
        }
    }

    /// Order by (profit, selection preference). Greater is better.
    ///
    /// Profits are compared exactly. Sums that are equal in real arithmetic
    /// can differ in the last ulp depending on summation order (0.1 + 0.2 vs
    /// 0.3), and then the larger float wins without consulting the index
    /// preference. An epsilon would make this order non-transitive, which the
    /// frontier sort and dominance pruning rely on.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.profit
            .total_cmp(&other.profit)
            .then_with(|| self.selection.preference(&other.selection))
    }

    /// Whether every room here frees up no later than the matching room in
    /// `other`. Both tuples are sorted, so pairing them in order is enough.
    fn frees_no_later_than(&self, other: &Self) -> bool {
        self.free_at
            .iter()
            .zip(other.free_at.iter())
            .all(|(a, b)| a <= b)
    }

    /// Collapse free-times that no remaining interval can observe.
    ///
    /// `horizon` is the smallest start rank among the events still to come.
    fn normalize(&mut self, horizon: TimeRank) {
        for free in self.free_at.iter_mut() {
            if *free <= horizon {
                *free = FREE_FROM_START;
            }
        }
        self.free_at.sort_unstable();
    }
}

/// Live DP states after processing a prefix of the events.
#[derive(Clone, Debug)]
pub struct Frontier {
    states: Vec<RoomState>,
}

impl Frontier {
    pub fn new(rooms: usize, interval_count: usize) -> Self {
        Self {
            states: vec![RoomState::initial(rooms, interval_count)],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Best state by [`RoomState::cmp_value`].
    pub fn best(&self) -> Option<&RoomState> {
        self.states.iter().max_by(|a, b| a.cmp_value(b))
    }

    /// Process one event: every state either skips it or places it in one of
    /// its rooms that is free by the event's start.
    ///
    /// Fails with `ResourceExceeded` when more than `budget` distinct
    /// successor states appear; dominance pruning is skipped in that case.
    pub fn advance(
        &mut self,
        event: &Event,
        horizon: TimeRank,
        budget: usize,
        verbosity: u8,
    ) -> Result<(), SchedulerError> {
        let mut next: FxHashMap<Box<[TimeRank]>, RoomState> =
            FxHashMap::with_capacity_and_hasher(self.states.len() * 2, Default::default());

        for state in self.states.drain(..) {
            let mut last_tried: Option<TimeRank> = None;
            for slot in 0..state.free_at.len() {
                let free = state.free_at[slot];
                if free > event.start {
                    break;
                }
                // equal free-times yield the same successor
                if last_tried == Some(free) {
                    continue;
                }
                last_tried = Some(free);

                let mut placed = RoomState {
                    free_at: state.free_at.clone(),
                    profit: state.profit + event.profit,
                    selection: state.selection.clone(),
                };
                placed.free_at[slot] = event.end;
                placed.selection.insert(event.index);
                placed.normalize(horizon);
                log_states!(
                    verbosity,
                    "place #{} {:?} -> {:?} profit={}",
                    event.index,
                    state.free_at,
                    placed.free_at,
                    placed.profit
                );
                offer(&mut next, placed);
            }

            let mut skipped = state;
            skipped.normalize(horizon);
            offer(&mut next, skipped);
        }

        if next.len() > budget {
            return Err(SchedulerError::ResourceExceeded {
                limit: budget,
                states: next.len(),
            });
        }
        self.states = prune_dominated(next.into_values().collect());
        Ok(())
    }
}

/// Insert `state`, keeping the better of it and any state with the same rooms.
fn offer(next: &mut FxHashMap<Box<[TimeRank]>, RoomState>, state: RoomState) {
    match next.get_mut(&state.free_at) {
        Some(existing) => {
            if state.cmp_value(existing) == Ordering::Greater {
                *existing = state;
            }
        }
        None => {
            next.insert(state.free_at.clone(), state);
        }
    }
}

/// Drop every state that another state matches or beats in value while
/// freeing all its rooms no later.
fn prune_dominated(mut states: Vec<RoomState>) -> Vec<RoomState> {
    states.sort_by(|a, b| b.cmp_value(a).then_with(|| a.free_at.cmp(&b.free_at)));

    let mut kept: Vec<RoomState> = Vec::with_capacity(states.len());
    for candidate in states {
        if !kept.iter().any(|k| k.frees_no_later_than(&candidate)) {
            kept.push(candidate);
        }
    }
    kept
}
