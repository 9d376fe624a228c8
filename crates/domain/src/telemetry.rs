//! Telemetry reading — a single decoded sensor observation.
//!
//! Readings are transient: one is constructed per inbound message,
//! evaluated against the policy, and discarded.

use crate::time::{Timestamp, now};

/// A decoded scalar observation (moisture percent, light level, …).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryReading {
    /// The sensor value relevant to the actuation decision.
    pub value: f64,
    /// When the bridge received the message carrying this value.
    pub received_at: Timestamp,
}

impl TelemetryReading {
    /// Create a reading received now.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            received_at: now(),
        }
    }

    /// Create a reading with an explicit arrival time.
    #[must_use]
    pub fn at(value: f64, received_at: Timestamp) -> Self {
        Self { value, received_at }
    }
}
