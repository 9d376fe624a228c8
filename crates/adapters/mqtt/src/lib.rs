//! # sprout-adapter-mqtt
//!
//! MQTT transport adapter — the bridge's connection to the message bus.
//!
//! ## Responsibilities
//! - Connect to the MQTT broker and subscribe to the device's telemetry
//!   topic (QoS 1, matching the device firmware)
//! - Decode telemetry payloads into [`TelemetryReading`] values and
//!   forward them through an mpsc channel; undecodable payloads are
//!   logged and discarded here, never forwarded
//! - Publish [`ActuationCommand`] values to the device's command topic
//!   (implements the `CommandPublisher` port)
//!
//! ## Dependency rule
//! Depends on `sprout-app` and `sprout-domain`.
//!
//! [`TelemetryReading`]: sprout_domain::telemetry::TelemetryReading
//! [`ActuationCommand`]: sprout_domain::command::ActuationCommand

pub mod client;
pub mod config;
pub mod decode;
pub mod error;

pub use client::MqttTransport;
pub use config::MqttConfig;
pub use error::MqttError;
