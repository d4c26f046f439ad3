//! # Prediction client
//!
//! Sends a completed [`SubmissionRecord`](moodflag_domain::record::SubmissionRecord)
//! to the remote classifier with a single `POST {base_url}/predict` and maps the
//! reply onto one of three outcomes:
//!
//! | Reply                          | Outcome                                   |
//! |--------------------------------|-------------------------------------------|
//! | `200 {"prediction": 0\|1\|2}`  | [`SubmissionState::Success`]              |
//! | non-200 `{"detail": "..."}`    | [`SubmissionState::ServerError`]          |
//! | no (readable) reply            | [`SubmissionState::TransportError`]       |
//!
//! ```no_run
//! use moodflag_domain::config::ClientConfig;
//! use moodflag_prediction::{PredictionClient, Submission};
//! # async fn run(record: moodflag_domain::record::SubmissionRecord) -> Result<(), moodflag_prediction::PredictionError> {
//! let config = ClientConfig::default();
//! let client = PredictionClient::new(&config)?;
//! let mut submission = Submission::new(client, config.prediction.result_delay());
//!
//! if let Some(notice) = submission.submit(&record).await.render() {
//!     println!("{notice}");
//! }
//! # Ok(())
//! # }
//! ```
mod client;
mod error;
mod submission;

pub use client::{PredictionClient, PredictionService};
pub use error::{PredictionError, PredictionErrorExt};
pub use submission::{Notice, SUCCESS_BADGE, Submission, SubmissionState};
