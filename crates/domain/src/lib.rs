//! # sprout-domain
//!
//! Pure domain model for the sprout telemetry/actuation bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **TelemetryReading** (a decoded sensor observation)
//! - Define **ActuationPolicy** (threshold decision + cycle timings)
//! - Define **ControllerState** (the idle/actuating state machine states)
//! - Define **ActuationCommand** (the outbound relay/LED toggle)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod id;
pub mod policy;
pub mod state;
pub mod telemetry;
pub mod time;
