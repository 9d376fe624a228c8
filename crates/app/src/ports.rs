//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the controller
//! and the adapter layer can depend on them without creating circular
//! dependencies.

use std::future::Future;
use std::sync::Arc;

use sprout_domain::command::ActuationCommand;
use sprout_domain::error::SproutError;
use sprout_domain::telemetry::TelemetryReading;

/// Delivers actuation commands to the device over the message bus.
///
/// A publish failure must be representable as a loggable error; it must
/// never raise an unrecoverable fault into the controller.
pub trait CommandPublisher {
    /// Publish a command to the device's command topic.
    fn publish(
        &self,
        command: ActuationCommand,
    ) -> impl Future<Output = Result<(), SproutError>> + Send;
}

impl<T: CommandPublisher + Send + Sync> CommandPublisher for Arc<T> {
    fn publish(
        &self,
        command: ActuationCommand,
    ) -> impl Future<Output = Result<(), SproutError>> + Send {
        (**self).publish(command)
    }
}

/// Persists raw telemetry readings as they arrive.
pub trait ReadingRecorder {
    /// Append one reading to the underlying store.
    fn record(
        &self,
        reading: &TelemetryReading,
    ) -> impl Future<Output = Result<(), SproutError>> + Send;
}

impl<T: ReadingRecorder + Send + Sync> ReadingRecorder for Arc<T> {
    fn record(
        &self,
        reading: &TelemetryReading,
    ) -> impl Future<Output = Result<(), SproutError>> + Send {
        (**self).record(reading)
    }
}
