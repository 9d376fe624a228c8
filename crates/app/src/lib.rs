//! # sprout-app
//!
//! Application layer — the actuation controller and **port definitions**.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `CommandPublisher` — deliver actuation commands to the device
//!   - `ReadingRecorder` — persist raw telemetry readings
//! - Provide the **ActuationController**: threshold decision, debounce,
//!   and the timed on/hold/off/cooldown cycle
//! - Provide the **TelemetryBridge**: the single consumer task that
//!   drains the inbound reading stream into recorder and controller
//!
//! ## Dependency rule
//! Depends on `sprout-domain` only (plus `tokio` for tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not
//! the reverse.

pub mod bridge;
pub mod controller;
pub mod ports;
