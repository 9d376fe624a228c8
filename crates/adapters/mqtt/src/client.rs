//! MQTT transport — rumqttc client plus the background listener task.
//!
//! [`MqttTransport::connect`] builds the client, spawns the event-loop
//! task, and hands back a channel of decoded readings. The transport
//! itself is the command-publishing half: it implements the
//! [`CommandPublisher`] port by serializing commands onto the device's
//! command topic.

use std::future::Future;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::sync::mpsc;

use sprout_app::ports::CommandPublisher;
use sprout_domain::command::ActuationCommand;
use sprout_domain::error::SproutError;
use sprout_domain::telemetry::TelemetryReading;

use crate::config::MqttConfig;
use crate::decode;
use crate::error::MqttError;

/// Pause before re-polling after a connection error. rumqttc
/// re-establishes the connection on the next poll.
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Command-publishing half of the MQTT transport.
pub struct MqttTransport {
    client: AsyncClient,
    command_topic: String,
    command_field: String,
}

impl MqttTransport {
    /// Build the client, spawn the listener task, and return the
    /// transport together with the inbound reading channel.
    ///
    /// The connection is established lazily by the event loop; broker
    /// unavailability surfaces as logged reconnect attempts, not as an
    /// error here. Must be called from within a tokio runtime.
    #[must_use]
    pub fn connect(config: &MqttConfig) -> (Self, mpsc::Receiver<TelemetryReading>) {
        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));

        let (client, eventloop) = AsyncClient::new(options, 16);
        let (tx, rx) = mpsc::channel(config.channel_capacity);

        let listener = TelemetryListener {
            client: client.clone(),
            eventloop,
            telemetry_topic: config.telemetry_topic(),
            telemetry_field: config.telemetry_field.clone(),
            tx,
        };
        tokio::spawn(listener.run());

        let transport = Self {
            client,
            command_topic: config.command_topic(),
            command_field: config.command_field.clone(),
        };
        (transport, rx)
    }
}

impl CommandPublisher for MqttTransport {
    fn publish(
        &self,
        command: ActuationCommand,
    ) -> impl Future<Output = Result<(), SproutError>> + Send {
        let payload = command_payload(&self.command_field, command);
        async move {
            tracing::debug!(topic = %self.command_topic, on = command.on, "sending actuation command");
            self.client
                .publish(&self.command_topic, QoS::AtLeastOnce, false, payload)
                .await
                .map_err(|err| MqttError::Client(err).into_domain())
        }
    }
}

/// Serialize a command as the single-field JSON object the device expects.
fn command_payload(field: &str, command: ActuationCommand) -> Vec<u8> {
    let mut object = serde_json::Map::new();
    object.insert(field.to_string(), serde_json::Value::Bool(command.on));
    serde_json::Value::Object(object).to_string().into_bytes()
}

/// Background task driving the rumqttc event loop.
struct TelemetryListener {
    client: AsyncClient,
    eventloop: EventLoop,
    telemetry_topic: String,
    telemetry_field: String,
    tx: mpsc::Sender<TelemetryReading>,
}

impl TelemetryListener {
    /// Poll the event loop until the reading channel closes.
    ///
    /// Subscribes (QoS 1) on every connection acknowledgement so the
    /// subscription survives broker reconnects.
    async fn run(mut self) {
        loop {
            match self.eventloop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    tracing::info!(topic = %self.telemetry_topic, "connected, subscribing to telemetry");
                    if let Err(err) = self
                        .client
                        .subscribe(&self.telemetry_topic, QoS::AtLeastOnce)
                        .await
                    {
                        tracing::warn!(%err, "failed to subscribe to telemetry topic");
                    }
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    match decode::decode_reading(&publish.payload, &self.telemetry_field) {
                        Ok(reading) => {
                            tracing::debug!(value = reading.value, "telemetry received");
                            if self.tx.send(reading).await.is_err() {
                                tracing::info!("reading channel closed, stopping MQTT listener");
                                return;
                            }
                        }
                        // Malformed telemetry never reaches the controller.
                        Err(err) => {
                            tracing::warn!(%err, topic = %publish.topic, "discarding undecodable telemetry");
                        }
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "MQTT connection error, retrying");
                    tokio::time::sleep(RECONNECT_DELAY).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_command_with_configured_field() {
        let payload = command_payload("relay_on", ActuationCommand::on());
        assert_eq!(payload, br#"{"relay_on":true}"#);

        let payload = command_payload("led_on", ActuationCommand::off());
        assert_eq!(payload, br#"{"led_on":false}"#);
    }

    #[tokio::test]
    async fn should_build_transport_with_topics_from_config() {
        let config = MqttConfig::default();
        let (transport, _rx) = MqttTransport::connect(&config);
        assert_eq!(transport.command_topic, config.command_topic());
        assert_eq!(transport.command_field, "relay_on");
    }
}
