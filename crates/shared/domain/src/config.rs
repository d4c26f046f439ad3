use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Address of the hosted prediction service.
pub const DEFAULT_BASE_URL: &str = "https://moodflag-api.onrender.com";

/// Cosmetic pause before a result is shown.
pub const DEFAULT_RESULT_DELAY: Duration = Duration::from_secs(3);

/// Upper bound for a single prediction request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Top-level client configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub prediction: PredictionConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Prediction service settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Service root; `/predict` is appended.
    pub base_url: String,
    /// Wait before a result is displayed; `0` disables it.
    pub result_delay_ms: u64,
    /// Transport bound for the single request.
    pub timeout_secs: u64,
}

impl PredictionConfig {
    #[must_use]
    pub const fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the predict endpoint, tolerant of a trailing slash on the base.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), crate::constants::PREDICT_PATH)
    }
}

/// Logging settings applied by the binary at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Explicit filter directives; wins over `level`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            result_delay_ms: u64::try_from(DEFAULT_RESULT_DELAY.as_millis()).unwrap_or(u64::MAX),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, directory: None, json: false }
    }
}
