use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Base name of the optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "moodflag";

/// Prefix of environment overrides (`MOODFLAG__PREDICTION__BASE_URL`).
pub const ENV_PREFIX: &str = "MOODFLAG";

/// Separator between nesting levels in environment override names.
pub const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[moodflag_derive::moodflag_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from defaults, an optional file and environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Type defaults**: every field missing below keeps `T`'s `#[serde(default)]` value.
/// 2. **File**: `path` when given (must exist), otherwise `moodflag.toml` (or any
///    supported extension) in the working directory if present.
/// 3. **Environment**: variables prefixed with `MOODFLAG__`, nesting with `__`
///    (e.g., `MOODFLAG__PREDICTION__RESULT_DELAY_MS=0`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
/// malformed, or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use moodflag_kernel::config::load_config;
/// use moodflag_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("does/not/exist.toml")).unwrap_or_default();
/// assert!(cfg.prediction.endpoint().ends_with("/predict"));
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let env = Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
        .try_parsing(true);

    load_with_env(path.as_ref().map(|p| p.as_ref()), env)
}

fn load_with_env<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            File::from(path).required(true)
        },
        None => {
            debug!("Looking for optional {DEFAULT_CONFIG_FILE} config file");
            File::with_name(DEFAULT_CONFIG_FILE).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
