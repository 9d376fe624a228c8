//! # sprout-adapter-csv
//!
//! CSV persistence adapter — appends each raw telemetry reading as a
//! `date,value` row, creating the file (with header) on first write.
//!
//! ## Dependency rule
//! Depends on `sprout-app` (for the `ReadingRecorder` port) and
//! `sprout-domain`.

use std::fs::OpenOptions;
use std::future::Future;
use std::path::PathBuf;

use chrono::SecondsFormat;
use serde::Serialize;

use sprout_app::ports::ReadingRecorder;
use sprout_domain::error::SproutError;
use sprout_domain::telemetry::TelemetryReading;

/// Errors specific to the CSV adapter.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// Failed to open or create the readings file.
    #[error("failed to open readings file")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or write a row.
    #[error("failed to write reading row")]
    Write(#[from] csv::Error),
}

#[derive(Serialize)]
struct Row {
    date: String,
    value: f64,
}

/// Appends readings to a CSV file, one row per reading.
pub struct CsvReadingRecorder {
    path: PathBuf,
}

impl CsvReadingRecorder {
    /// Create a recorder writing to the given path. The file is created
    /// lazily on the first recorded reading.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, reading: &TelemetryReading) -> Result<(), CsvError> {
        let new_file = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(new_file)
            .from_writer(file);
        writer.serialize(Row {
            date: reading
                .received_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            value: reading.value,
        })?;
        writer.flush()?;
        Ok(())
    }
}

impl ReadingRecorder for CsvReadingRecorder {
    fn record(
        &self,
        reading: &TelemetryReading,
    ) -> impl Future<Output = Result<(), SproutError>> + Send {
        let result = self
            .append(reading)
            .map_err(|err| SproutError::Storage(Box::new(err)));
        async move { result }
    }
}
