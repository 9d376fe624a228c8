//! Telemetry payload decoding.
//!
//! Devices publish `{ "<field>": <number> }` JSON payloads. Decoding
//! happens entirely in this adapter: the controller only ever sees
//! well-formed readings, and a missing field is a typed error rather
//! than a sentinel value.

use sprout_domain::telemetry::TelemetryReading;

/// Decoding failures for inbound telemetry payloads.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid JSON.
    #[error("payload is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// The expected field is absent from the payload.
    #[error("field `{0}` missing from payload")]
    MissingField(String),

    /// The field is present but not a number.
    #[error("field `{0}` is not a number")]
    NotANumber(String),
}

/// Decode a raw payload into a [`TelemetryReading`].
///
/// # Errors
///
/// Returns a [`DecodeError`] when the payload is malformed or the
/// expected field is absent or non-numeric.
pub fn decode_reading(payload: &[u8], field: &str) -> Result<TelemetryReading, DecodeError> {
    let json: serde_json::Value =
        serde_json::from_slice(payload).map_err(DecodeError::InvalidJson)?;
    let value = json
        .get(field)
        .ok_or_else(|| DecodeError::MissingField(field.to_string()))?;
    let number = value
        .as_f64()
        .ok_or_else(|| DecodeError::NotANumber(field.to_string()))?;
    Ok(TelemetryReading::new(number))
}
