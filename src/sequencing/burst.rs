//! Burst timing arithmetic.
//!
//! A burst takes one photo per interval until a total duration is used up.
//! The remaining time is tracked as a [`Duration`] counting down in whole
//! interval steps, so it never drifts and lands on exactly zero after the
//! final tick.

use std::time::Duration;

use crate::error_handling::types::ConfigError;

/// Immutable description of a burst: how often and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstPlan {
    interval: Duration,
    total_duration: Duration,
}

impl BurstPlan {
    pub fn from_millis(interval_ms: u64, total_duration_ms: u64) -> Result<Self, ConfigError> {
        if interval_ms == 0 {
            return Err(ConfigError::BadInterval(
                "capture interval must be at least 1ms".to_string(),
            ));
        }
        if total_duration_ms == 0 {
            return Err(ConfigError::BadDuration(
                "total burst duration must be at least 1ms".to_string(),
            ));
        }
        if interval_ms > total_duration_ms {
            return Err(ConfigError::BadInterval(format!(
                "capture interval ({}ms) exceeds total duration ({}ms)",
                interval_ms, total_duration_ms
            )));
        }
        Ok(Self {
            interval: Duration::from_millis(interval_ms),
            total_duration: Duration::from_millis(total_duration_ms),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Number of ticks in the burst: intervals that fit in the total
    /// duration, with a trailing partial interval still producing a tick.
    pub fn ticks(&self) -> u64 {
        self.total_duration
            .as_millis()
            .div_ceil(self.interval.as_millis()) as u64
    }
}

/// Phase reported after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstPhase {
    Continue,
    Complete,
}

/// Mutable countdown over a [`BurstPlan`].
///
/// `remaining` stays within `[0, total_duration]` and is exactly zero once
/// the burst is complete.
#[derive(Debug, Clone)]
pub struct BurstProgress {
    plan: BurstPlan,
    remaining: Duration,
    ticks_done: u64,
}

impl BurstProgress {
    pub fn new(plan: BurstPlan) -> Self {
        Self {
            plan,
            remaining: plan.total_duration(),
            ticks_done: 0,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn ticks_done(&self) -> u64 {
        self.ticks_done
    }

    /// Consumes one interval of the budget.
    pub fn advance(&mut self) -> BurstPhase {
        self.remaining = self.remaining.saturating_sub(self.plan.interval());
        self.ticks_done += 1;
        if self.remaining.is_zero() {
            BurstPhase::Complete
        } else {
            BurstPhase::Continue
        }
    }
}
