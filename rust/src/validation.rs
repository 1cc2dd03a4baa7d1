//! Input validation for room scheduling.
//!
//! Rejects the whole call on the first malformed input, so a caller can never
//! mistake a schedule over a filtered subset for a complete one.

use crate::models::Interval;
use crate::scheduler::SchedulerError;

/// Check that the room count is usable.
pub fn validate_room_count(room_count: usize) -> Result<(), SchedulerError> {
    if room_count < 1 {
        return Err(SchedulerError::InvalidConfiguration(format!(
            "room_count must be at least 1, got {}",
            room_count
        )));
    }
    Ok(())
}

/// Check every interval, reporting the first offending index.
///
/// An interval is well formed when its endpoints are finite with
/// `start < end`, and its profit is finite and strictly positive.
pub fn validate_intervals(intervals: &[Interval]) -> Result<(), SchedulerError> {
    for (index, interval) in intervals.iter().enumerate() {
        if let Some(reason) = interval_defect(interval) {
            return Err(SchedulerError::InvalidInterval { index, reason });
        }
    }
    Ok(())
}

fn interval_defect(interval: &Interval) -> Option<String> {
    let Interval { start, end, profit } = *interval;

    if !start.is_finite() || !end.is_finite() {
        return Some(format!("endpoints must be finite (start={}, end={})", start, end));
    }
    if start >= end {
        return Some(format!("start {} must be before end {}", start, end));
    }
    if !profit.is_finite() || profit <= 0.0 {
        return Some(format!("profit must be positive and finite, got {}", profit));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_index(intervals: &[Interval]) -> Option<usize> {
        match validate_intervals(intervals) {
            Err(SchedulerError::InvalidInterval { index, .. }) => Some(index),
            _ => None,
        }
    }

    #[test]
    fn test_room_count() {
        assert!(validate_room_count(1).is_ok());
        assert!(validate_room_count(7).is_ok());
        assert!(matches!(
            validate_room_count(0),
            Err(SchedulerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_well_formed_intervals_pass() {
        let intervals = vec![
            Interval::new(1.0, 3.0, 100.0),
            Interval::new(-5.0, -4.5, 0.25),
        ];
        assert!(validate_intervals(&intervals).is_ok());
        assert!(validate_intervals(&[]).is_ok());
    }

    #[test]
    fn test_reports_first_offender() {
        let intervals = vec![
            Interval::new(1.0, 3.0, 100.0),
            Interval::new(3.0, 3.0, 100.0), // zero length
            Interval::new(5.0, 4.0, 100.0), // reversed
        ];
        assert_eq!(invalid_index(&intervals), Some(1));
    }

    #[test]
    fn test_rejects_bad_profit() {
        assert_eq!(invalid_index(&[Interval::new(0.0, 1.0, 0.0)]), Some(0));
        assert_eq!(invalid_index(&[Interval::new(0.0, 1.0, -3.0)]), Some(0));
        assert_eq!(
            invalid_index(&[Interval::new(0.0, 1.0, 1.0), Interval::new(0.0, 1.0, f64::NAN)]),
            Some(1)
        );
    }

    #[test]
    fn test_rejects_non_finite_times() {
        assert_eq!(invalid_index(&[Interval::new(f64::NAN, 1.0, 1.0)]), Some(0));
        assert_eq!(invalid_index(&[Interval::new(0.0, f64::INFINITY, 1.0)]), Some(0));
        assert_eq!(
            invalid_index(&[Interval::new(f64::NEG_INFINITY, 0.0, 1.0)]),
            Some(0)
        );
    }

    #[test]
    fn test_error_message_names_index() {
        let err = validate_intervals(&[Interval::new(2.0, 1.0, 1.0)]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("interval 0"), "{}", message);
    }
}
