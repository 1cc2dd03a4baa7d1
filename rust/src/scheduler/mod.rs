//! Exact profit-maximizing scheduler for intervals on interchangeable rooms.
//!
//! The search runs over room-occupancy states in end-time order (see
//! [`RoomScheduler`]); `rooms` turns the winning selection into concrete
//! room numbers.

mod core;
mod rooms;
mod selection;
mod state;

pub use core::{schedule, schedule_with_config, RoomScheduler, SchedulerError};
