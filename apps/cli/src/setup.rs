//! Startup: configuration layering and logging.

use crate::args::Args;
use anyhow::{Context, Result};
use moodflag::domain::config::{ClientConfig, LoggingConfig};
use moodflag::domain::record::SubmissionRecord;
use moodflag::kernel::config::load_config;
use moodflag_logger::{LevelFilter, Logger};
use std::io::IsTerminal;
use std::path::Path;

/// Loads file/env configuration, then applies command-line overrides.
pub(crate) fn load_settings(args: &Args) -> Result<ClientConfig> {
    let mut config: ClientConfig =
        load_config(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(base_url) = &args.base_url {
        config.prediction.base_url.clone_from(base_url);
    }
    if args.no_delay {
        config.prediction.result_delay_ms = 0;
    }

    Ok(config)
}

/// Installs the global subscriber; logs go to stderr and, optionally, to files.
pub(crate) fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<Logger> {
    let configured: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid logging.level `{}`", config.level))?;
    let level = configured.max(verbosity(verbose));

    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(level)
        .ansi(std::io::stderr().is_terminal());
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}

/// Reads a pre-filled record in the request body shape.
pub(crate) fn read_answers(path: &Path) -> Result<SubmissionRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid answers in {}", path.display()))
}

const fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
