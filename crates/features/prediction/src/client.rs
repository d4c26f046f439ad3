use crate::error::{PredictionError, PredictionErrorExt};
use moodflag_domain::config::{ClientConfig, PredictionConfig};
use moodflag_domain::constants::{DETAIL_FIELD, PREDICTION_FIELD};
use moodflag_domain::record::SubmissionRecord;
use moodflag_domain::risk::RiskLevel;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::future::Future;
use tracing::{debug, info, warn};

/// Anything that can turn a record into a risk level.
///
/// [`PredictionClient`] is the HTTP implementation; tests and alternative
/// front-ends can plug in their own.
pub trait PredictionService {
    /// Submits one record and waits for the classification.
    ///
    /// # Errors
    /// Returns [`PredictionError::Rejected`] for a non-200 answer carrying a
    /// `detail`, [`PredictionError::Transport`] when no readable response
    /// arrived, and [`PredictionError::MalformedResponse`] for any other reply.
    fn predict(
        &self,
        record: &SubmissionRecord,
    ) -> impl Future<Output = Result<RiskLevel, PredictionError>> + Send;
}

/// HTTP client for `POST {base_url}/predict`.
///
/// One call issues exactly one request: no retries, no caching, no
/// deduplication of identical records.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    endpoint: Url,
}

impl PredictionClient {
    /// Builds a client from the injected configuration.
    ///
    /// # Errors
    /// Returns [`PredictionError::InvalidConfig`] if the base URL is not an
    /// absolute `http`/`https` URL, or [`PredictionError::Transport`] if the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, PredictionError> {
        let endpoint = parse_endpoint(&config.prediction)?;

        let mut builder =
            Client::builder().user_agent(concat!("moodflag/", env!("CARGO_PKG_VERSION")));
        let timeout = config.prediction.timeout();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        debug!(%endpoint, ?timeout, "Prediction client ready");
        Ok(Self { http, endpoint })
    }

    /// The resolved predict URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PredictionService for PredictionClient {
    async fn predict(&self, record: &SubmissionRecord) -> Result<RiskLevel, PredictionError> {
        info!(endpoint = %self.endpoint, "Submitting questionnaire");
        debug!(?record, "Prediction request body");

        let response = self.http.post(self.endpoint.clone()).json(record).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|err| PredictionError::MalformedResponse {
                message: format!("status {status} with a non-JSON body: {err}").into(),
                context: None,
            })?;

        match interpret(status, &body) {
            Ok(level) => {
                info!(status = status.as_u16(), risk = %level, "Prediction received");
                Ok(level)
            },
            Err(err) => {
                warn!(status = status.as_u16(), error = %err, "Prediction failed");
                Err(err)
            },
        }
    }
}

fn parse_endpoint(config: &PredictionConfig) -> Result<Url, PredictionError> {
    let raw = config.endpoint();
    let url = Url::parse(&raw).map_err(|err| PredictionError::InvalidConfig {
        message: format!("`{}` is not a valid base URL: {err}", config.base_url).into(),
        context: None,
    })?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(PredictionError::InvalidConfig {
            message: format!("`{}` must be an absolute http(s) URL", config.base_url).into(),
            context: None,
        });
    }

    Ok(url)
}

/// Maps a decoded reply onto the three outcomes of the service contract.
fn interpret(status: StatusCode, body: &Value) -> Result<RiskLevel, PredictionError> {
    if status == StatusCode::OK {
        let code = body.get(PREDICTION_FIELD).and_then(risk_code).ok_or_else(|| {
            PredictionError::MalformedResponse {
                message: format!("response has no integer `{PREDICTION_FIELD}`").into(),
                context: None,
            }
        })?;

        return RiskLevel::try_from(code).map_err(|err| PredictionError::MalformedResponse {
            message: err.to_string().into(),
            context: None,
        });
    }

    let detail = match body.get(DETAIL_FIELD) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => {
            return Err(PredictionError::MalformedResponse {
                message: format!("status {status} without a `{DETAIL_FIELD}` message").into(),
                context: None,
            });
        },
        // Validation errors carry structured details; show them verbatim.
        Some(other) => other.to_string(),
    };

    Err(PredictionError::Rejected { status: status.as_u16(), detail, context: None })
}

/// Reads the class code; integral floats such as `1.0` count as integers.
#[allow(clippy::cast_possible_truncation)]
fn risk_code(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|code| code.fract() == 0.0 && (-1024.0..=1024.0).contains(code))
            .map(|code| code as i64)
    })
}
