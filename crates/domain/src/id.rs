//! Typed identifier newtypes backed by UUIDs.
//!
//! The bridge and the device agree on a shared UUID that namespaces the
//! MQTT topics they communicate on, so the identifier doubles as the
//! topic prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier shared between a device and its bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(uuid::Uuid);

impl Default for DeviceId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl DeviceId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }

    /// Topic the device publishes sensor telemetry on.
    #[must_use]
    pub fn telemetry_topic(self) -> String {
        format!("{self}/telemetry")
    }

    /// Topic the bridge publishes actuation commands on.
    #[must_use]
    pub fn command_topic(self) -> String {
        format!("{self}/commands")
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = DeviceId::new();
        let b = DeviceId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::new();
        let text = id.to_string();
        let parsed: DeviceId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = DeviceId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = DeviceId::from_str("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn should_derive_topic_pair_from_id() {
        let id: DeviceId = "192a986b-602f-4092-be87-89f3bc80e9b0".parse().unwrap();
        assert_eq!(
            id.telemetry_topic(),
            "192a986b-602f-4092-be87-89f3bc80e9b0/telemetry"
        );
        assert_eq!(
            id.command_topic(),
            "192a986b-602f-4092-be87-89f3bc80e9b0/commands"
        );
    }
}
