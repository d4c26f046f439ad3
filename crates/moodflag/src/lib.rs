//! Facade crate for `MoodFlag` features and shared modules.
//! Re-exports domain/kernel primitives and wires the feature crates together.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`ClientConfig`] with [`kernel::config::load_config`].
//! - Call [`init`] to get a [`Submission`] bound to the configured service.
//! - Collect answers with [`features::questionnaire`] and pass the record to
//!   [`Submission::submit`].

pub use moodflag_domain as domain;
use moodflag_domain::config::ClientConfig;
pub use moodflag_kernel as kernel;
use moodflag_prediction::{PredictionClient, PredictionError, Submission};

/// Feature crates, re-exported under one roof.
pub mod features {
    pub use moodflag_prediction as prediction;
    pub use moodflag_questionnaire as questionnaire;
}

/// Builds the prediction client and its submission driver from `config`.
///
/// # Errors
/// Returns an error if the configured base URL is unusable or the HTTP client
/// cannot be built.
pub fn init(config: &ClientConfig) -> Result<Submission<PredictionClient>, PredictionError> {
    let client = PredictionClient::new(config)?;
    tracing::info!(endpoint = %client.endpoint(), "Prediction feature initialized");

    Ok(Submission::new(client, config.prediction.result_delay()))
}
