//! Configuration for the room scheduler.

use pyo3::prelude::*;

use crate::scheduler::SchedulerError;

/// Tuning knobs for a scheduling run.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Upper bound on live DP states after any single interval.
    /// Exceeding it fails the run with `ResourceExceeded`.
    #[pyo3(get, set)]
    pub max_frontier_states: usize,
    /// Verbosity level: 0=silent, 1=summary, 2=steps, 3=states.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_frontier_states: 50_000,
            verbosity: 0,
        }
    }
}

impl SchedulerConfig {
    /// Reject values the scheduler cannot run with.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.max_frontier_states == 0 {
            return Err(SchedulerError::InvalidConfiguration(
                "max_frontier_states must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[pymethods]
impl SchedulerConfig {
    #[new]
    #[pyo3(signature = (max_frontier_states=None, verbosity=None))]
    fn new(max_frontier_states: Option<usize>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            max_frontier_states: max_frontier_states.unwrap_or(defaults.max_frontier_states),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SchedulerConfig(max_frontier_states={}, verbosity={})",
            self.max_frontier_states, self.verbosity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SchedulerConfig::default();
        assert_eq!(config.max_frontier_states, 50_000);
        assert_eq!(config.verbosity, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_frontier_budget_rejected() {
        let config = SchedulerConfig {
            max_frontier_states: 0,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SchedulerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_new_falls_back_to_defaults() {
        let config = SchedulerConfig::new(None, Some(2));
        assert_eq!(config.max_frontier_states, 50_000);
        assert_eq!(config.verbosity, 2);
    }
}
