//! Profit-maximizing interval scheduling on interchangeable rooms.
//!
//! The pure Rust API lives in [`scheduler`]; this module also exposes it to
//! Python as the `rust` extension module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

pub mod baseline;
mod config;
mod interner;
pub mod logging;
mod models;
pub mod report;
pub mod scheduler;
mod sorting;
mod validation;

pub use baseline::first_fit_schedule;
pub use config::SchedulerConfig;
pub use models::{Assignment, Interval, ScheduleResult};
pub use report::render_report;
pub use scheduler::{schedule, schedule_with_config, RoomScheduler, SchedulerError};

fn to_py_err(err: SchedulerError) -> PyErr {
    match err {
        SchedulerError::ResourceExceeded { .. } | SchedulerError::Internal(_) => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Room counts arrive as Python ints; negative values are a configuration
/// error rather than a conversion error.
fn room_count_from_py(room_count: i64) -> PyResult<usize> {
    usize::try_from(room_count).map_err(|_| {
        to_py_err(SchedulerError::InvalidConfiguration(format!(
            "room_count must be at least 1, got {}",
            room_count
        )))
    })
}

/// Assign intervals to rooms so that total profit is maximal.
///
/// # Arguments
/// * `intervals` - List of Interval(start, end, profit)
/// * `room_count` - Number of interchangeable rooms (>= 1)
/// * `config` - Optional SchedulerConfig (frontier budget, verbosity)
///
/// # Returns
/// * ScheduleResult with assignments, unassigned indices and total profit
///
/// # Raises
/// * ValueError for a bad room count or malformed interval
/// * RuntimeError if the search exceeds its state budget
#[pyfunction]
#[pyo3(name = "schedule", signature = (intervals, room_count, config=None))]
fn py_schedule(
    intervals: Vec<Interval>,
    room_count: i64,
    config: Option<SchedulerConfig>,
) -> PyResult<ScheduleResult> {
    let room_count = room_count_from_py(room_count)?;
    let config = config.unwrap_or_default();
    schedule_with_config(&intervals, room_count, &config).map_err(to_py_err)
}

/// Greedy first-fit schedule, for comparison with `schedule`.
#[pyfunction]
#[pyo3(name = "first_fit_schedule")]
fn py_first_fit_schedule(intervals: Vec<Interval>, room_count: i64) -> PyResult<ScheduleResult> {
    let room_count = room_count_from_py(room_count)?;
    first_fit_schedule(&intervals, room_count).map_err(to_py_err)
}

/// Text listing of a schedule: every interval, every room, and the total.
#[pyfunction]
fn format_report(intervals: Vec<Interval>, result: ScheduleResult) -> String {
    render_report(&intervals, &result)
}

/// The roomsched.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<Interval>()?;
    m.add_class::<Assignment>()?;
    m.add_class::<ScheduleResult>()?;

    // Config types
    m.add_class::<SchedulerConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_first_fit_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(format_report, m)?)?;

    Ok(())
}
