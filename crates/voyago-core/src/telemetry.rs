//! Tracing subscriber initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::VoyagoResult;

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Default log filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON-formatted log lines instead of human-readable ones.
    #[serde(default)]
    pub json_output: bool,
}

fn default_service_name() -> String {
    "voyago-customer".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_filter: default_log_filter(),
            json_output: false,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, falling back to the configured filter.
/// Safe to call once per process; a second call returns an error from
/// the subscriber registry.
pub fn init_tracing(config: &TelemetryConfig) -> VoyagoResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone()));

    if config.json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| crate::VoyagoError::internal(format!("tracing init failed: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| crate::VoyagoError::internal(format!("tracing init failed: {}", e)))?;
    }

    Ok(())
}
