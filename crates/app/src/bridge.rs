//! Telemetry bridge — the single consumer task for inbound readings.
//!
//! The transport decodes messages into readings and pushes them down an
//! mpsc channel; the bridge drains that channel serially, optionally
//! persisting each reading before handing it to the controller. The
//! controller never blocks this loop — its actuation cycle runs on its
//! own task — so the debounce check is applied to every reading as it
//! arrives.

use tokio::sync::mpsc;

use sprout_domain::telemetry::TelemetryReading;

use crate::controller::ActuationController;
use crate::ports::{CommandPublisher, ReadingRecorder};

/// Drains a reading stream into an optional recorder and a controller.
pub struct TelemetryBridge<P, R> {
    controller: ActuationController<P>,
    recorder: Option<R>,
}

impl<P, R> TelemetryBridge<P, R>
where
    P: CommandPublisher + Send + Sync + 'static,
    R: ReadingRecorder,
{
    /// Create a bridge that only drives the controller.
    pub fn new(controller: ActuationController<P>) -> Self {
        Self {
            controller,
            recorder: None,
        }
    }

    /// Also persist every reading through the given recorder.
    #[must_use]
    pub fn with_recorder(mut self, recorder: R) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Consume readings until the channel closes.
    ///
    /// Recording failures are logged and the reading still reaches the
    /// controller; a broken store must not stop actuation.
    pub async fn run(self, mut readings: mpsc::Receiver<TelemetryReading>) {
        while let Some(reading) = readings.recv().await {
            if let Some(recorder) = &self.recorder {
                if let Err(err) = recorder.record(&reading).await {
                    tracing::warn!(%err, value = reading.value, "failed to record reading");
                }
            }
            self.controller.on_telemetry(&reading);
        }
        tracing::info!("telemetry stream closed, bridge stopping");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_domain::command::ActuationCommand;
    use sprout_domain::error::SproutError;
    use sprout_domain::policy::{ActuationPolicy, Comparison};
    use std::future::Future;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct SpyPublisher {
        published: Mutex<Vec<ActuationCommand>>,
    }

    impl CommandPublisher for SpyPublisher {
        fn publish(
            &self,
            command: ActuationCommand,
        ) -> impl Future<Output = Result<(), SproutError>> + Send {
            self.published.lock().unwrap().push(command);
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct SpyRecorder {
        recorded: Mutex<Vec<f64>>,
        fail: bool,
    }

    impl ReadingRecorder for SpyRecorder {
        fn record(
            &self,
            reading: &TelemetryReading,
        ) -> impl Future<Output = Result<(), SproutError>> + Send {
            self.recorded.lock().unwrap().push(reading.value);
            let fail = self.fail;
            async move {
                if fail {
                    Err(SproutError::Storage(Box::new(std::io::Error::other(
                        "disk full",
                    ))))
                } else {
                    Ok(())
                }
            }
        }
    }

    fn policy() -> ActuationPolicy {
        ActuationPolicy::new(
            15.0,
            Comparison::Below,
            Duration::from_millis(10),
            Duration::ZERO,
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn should_record_and_forward_each_reading() {
        let publisher = Arc::new(SpyPublisher::default());
        let recorder = Arc::new(SpyRecorder::default());
        let controller = ActuationController::new(policy(), Arc::clone(&publisher));
        let bridge =
            TelemetryBridge::new(controller).with_recorder(Arc::clone(&recorder));

        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(bridge.run(rx));

        tx.send(TelemetryReading::new(20.0)).await.unwrap();
        tx.send(TelemetryReading::new(10.0)).await.unwrap();
        drop(tx);
        handle.await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(*recorder.recorded.lock().unwrap(), vec![20.0, 10.0]);
        // Only the second reading triggered the controller.
        assert_eq!(
            *publisher.published.lock().unwrap(),
            vec![ActuationCommand::on(), ActuationCommand::off()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_actuating_when_recorder_fails() {
        let publisher = Arc::new(SpyPublisher::default());
        let recorder = Arc::new(SpyRecorder {
            recorded: Mutex::new(Vec::new()),
            fail: true,
        });
        let controller = ActuationController::new(policy(), Arc::clone(&publisher));
        let bridge =
            TelemetryBridge::new(controller).with_recorder(Arc::clone(&recorder));

        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(bridge.run(rx));

        tx.send(TelemetryReading::new(5.0)).await.unwrap();
        drop(tx);
        handle.await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(publisher.published.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_stop_when_channel_closes() {
        let publisher = Arc::new(SpyPublisher::default());
        let controller = ActuationController::new(policy(), publisher);
        let bridge: TelemetryBridge<_, Arc<SpyRecorder>> = TelemetryBridge::new(controller);

        let (tx, rx) = mpsc::channel::<TelemetryReading>(1);
        drop(tx);
        // Completes immediately; no readings, no commands.
        bridge.run(rx).await;
    }
}
