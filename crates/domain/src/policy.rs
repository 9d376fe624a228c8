//! Actuation policy — the threshold decision and cycle timings.
//!
//! A policy is immutable for the controller's lifetime. It answers one
//! question — does this reading warrant an actuation cycle? — and
//! carries the two durations that shape the cycle.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

/// Direction of the threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Trigger when the reading falls below the threshold
    /// (dry soil, dark room).
    Below,
    /// Trigger when the reading rises above the threshold.
    Above,
}

/// Immutable actuation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuationPolicy {
    /// Decision boundary; comparisons are strict, a reading exactly
    /// equal to the threshold never triggers.
    pub threshold: f64,
    /// Which side of the threshold triggers.
    pub comparison: Comparison,
    /// How long the actuator stays on.
    pub hold: Duration,
    /// Mandatory idle interval after the actuator turns off.
    pub cooldown: Duration,
}

impl ActuationPolicy {
    /// Build a validated policy.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the threshold is not finite or
    /// the hold duration is zero. A zero cooldown is allowed.
    pub fn new(
        threshold: f64,
        comparison: Comparison,
        hold: Duration,
        cooldown: Duration,
    ) -> Result<Self, ValidationError> {
        if !threshold.is_finite() {
            return Err(ValidationError::NonFiniteThreshold);
        }
        if hold.is_zero() {
            return Err(ValidationError::ZeroHold);
        }
        Ok(Self {
            threshold,
            comparison,
            hold,
            cooldown,
        })
    }

    /// Whether the given reading value satisfies the trigger condition.
    #[must_use]
    pub fn triggers(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::Below => value < self.threshold,
            Comparison::Above => value > self.threshold,
        }
    }
}
