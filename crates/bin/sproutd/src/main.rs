//! # sproutd — sprout daemon
//!
//! Composition root that wires the transport, controller, and recorder
//! together and runs until interrupted.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialise tracing
//! - Connect the MQTT transport and spawn its listener
//! - Construct the actuation controller with the configured policy
//! - Run the telemetry bridge, optionally recording readings to CSV
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;

use sprout_adapter_csv::CsvReadingRecorder;
use sprout_adapter_mqtt::MqttTransport;
use sprout_app::bridge::TelemetryBridge;
use sprout_app::controller::ActuationController;

mod config;
use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let policy = config.policy.build()?;
    tracing::info!(
        device_id = %config.mqtt.device_id,
        broker = %config.mqtt.broker_host,
        threshold = policy.threshold,
        "starting sproutd"
    );

    let (transport, readings) = MqttTransport::connect(&config.mqtt);
    let controller = ActuationController::new(policy, Arc::new(transport));

    let bridge = if config.recorder.csv_enabled {
        let recorder = CsvReadingRecorder::new(&config.recorder.csv_path);
        tokio::spawn(
            TelemetryBridge::new(controller)
                .with_recorder(recorder)
                .run(readings),
        )
    } else {
        tokio::spawn(TelemetryBridge::<_, CsvReadingRecorder>::new(controller).run(readings))
    };

    tokio::select! {
        _ = bridge => tracing::warn!("telemetry bridge stopped"),
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    Ok(())
}
