//! MQTT transport configuration.

use serde::Deserialize;

use sprout_domain::id::DeviceId;

/// Configuration for the MQTT transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Shared device UUID that namespaces the topic pair.
    pub device_id: DeviceId,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// JSON field carrying the sensor value (`soil_moisture`, `light`, …).
    pub telemetry_field: String,
    /// JSON field the device expects in commands (`relay_on`, `led_on`, …).
    pub command_field: String,
    /// Capacity of the inbound reading channel.
    pub channel_capacity: usize,
}

impl MqttConfig {
    /// Topic the transport subscribes to for telemetry.
    #[must_use]
    pub fn telemetry_topic(&self) -> String {
        self.device_id.telemetry_topic()
    }

    /// Topic the transport publishes commands on.
    #[must_use]
    pub fn command_topic(&self) -> String {
        self.device_id.command_topic()
    }
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "test.mosquitto.org".to_string(),
            broker_port: 1883,
            client_id: "sprout-bridge".to_string(),
            device_id: DeviceId::new(),
            keep_alive_secs: 30,
            telemetry_field: "soil_moisture".to_string(),
            command_field: "relay_on".to_string(),
            channel_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = MqttConfig::default();
        assert_eq!(config.broker_host, "test.mosquitto.org");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.client_id, "sprout-bridge");
        assert_eq!(config.keep_alive_secs, 30);
        assert_eq!(config.telemetry_field, "soil_moisture");
        assert_eq!(config.command_field, "relay_on");
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r"
            broker_host = 'mqtt.example.com'
            broker_port = 8883
            client_id = 'greenhouse-bridge'
            device_id = '192a986b-602f-4092-be87-89f3bc80e9b0'
            keep_alive_secs = 60
            telemetry_field = 'light'
            command_field = 'led_on'
            channel_capacity = 16
        ";
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "mqtt.example.com");
        assert_eq!(config.broker_port, 8883);
        assert_eq!(config.client_id, "greenhouse-bridge");
        assert_eq!(config.telemetry_field, "light");
        assert_eq!(config.command_field, "led_on");
        assert_eq!(config.channel_capacity, 16);
        assert_eq!(
            config.telemetry_topic(),
            "192a986b-602f-4092-be87-89f3bc80e9b0/telemetry"
        );
        assert_eq!(
            config.command_topic(),
            "192a986b-602f-4092-be87-89f3bc80e9b0/commands"
        );
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r"broker_host = '192.168.1.100'";
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "192.168.1.100");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.telemetry_field, "soil_moisture");
    }
}
