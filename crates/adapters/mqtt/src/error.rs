//! MQTT adapter error types.

use sprout_domain::error::SproutError;

use crate::decode::DecodeError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client returned an error.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// Failed to decode an incoming telemetry payload.
    #[error("failed to decode telemetry payload")]
    Decode(#[from] DecodeError),
}

impl MqttError {
    /// Convert into a [`SproutError::Transport`] for propagation across
    /// port boundaries.
    #[must_use]
    pub fn into_domain(self) -> SproutError {
        SproutError::Transport(Box::new(self))
    }
}

impl From<MqttError> for SproutError {
    fn from(err: MqttError) -> Self {
        err.into_domain()
    }
}
