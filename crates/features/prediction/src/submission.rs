use crate::client::PredictionService;
use crate::error::PredictionError;
use moodflag_domain::record::SubmissionRecord;
use moodflag_domain::risk::{RiskLevel, Tone};
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Badge shown above a successful result.
pub const SUCCESS_BADGE: &str = "Success";

/// Lifecycle of one submission.
///
/// `Idle -> Submitting -> Success | ServerError | TransportError`. The three
/// terminal states are mutually exclusive; a new submission starts over from
/// `Submitting`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(RiskLevel),
    /// Server `detail` of a rejected request.
    ServerError(String),
    /// Description of a transport failure or unreadable reply.
    TransportError(String),
}

/// User-facing rendering of a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub badge: Option<&'static str>,
    pub text: Cow<'static, str>,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl SubmissionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::ServerError(_) | Self::TransportError(_))
    }

    /// The message to show for a terminal state; `None` while idle or pending.
    #[must_use]
    pub fn render(&self) -> Option<Notice> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success(level) => Some(Notice {
                tone: level.tone(),
                badge: Some(SUCCESS_BADGE),
                text: Cow::Borrowed(level.message()),
            }),
            Self::ServerError(detail) => Some(Notice {
                tone: Tone::Error,
                badge: None,
                text: Cow::Owned(format!("Error: {detail}")),
            }),
            Self::TransportError(description) => Some(Notice {
                tone: Tone::Error,
                badge: None,
                text: Cow::Owned(format!("Failed to connect to prediction API: {description}")),
            }),
        }
    }
}

impl From<Result<RiskLevel, PredictionError>> for SubmissionState {
    fn from(result: Result<RiskLevel, PredictionError>) -> Self {
        match result {
            Ok(level) => Self::Success(level),
            Err(PredictionError::Rejected { detail, .. }) => Self::ServerError(detail),
            Err(other) => Self::TransportError(other.to_string()),
        }
    }
}

/// Drives one user-triggered submission at a time.
///
/// `submit` takes `&mut self` and awaits the single call, so two submissions
/// can never overlap.
#[derive(Debug)]
pub struct Submission<S> {
    service: S,
    result_delay: Duration,
    state: SubmissionState,
}

impl<S: PredictionService> Submission<S> {
    /// `result_delay` is the cosmetic pause applied once a response arrived.
    pub const fn new(service: S, result_delay: Duration) -> Self {
        Self { service, result_delay, state: SubmissionState::Idle }
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Sends `record` once and settles into a terminal state.
    ///
    /// Transport failures are reported immediately; any answer from the
    /// service is held back by the result delay first.
    pub async fn submit(&mut self, record: &SubmissionRecord) -> &SubmissionState {
        self.state = SubmissionState::Submitting;

        let result = self.service.predict(record).await;
        let answered = !matches!(&result, Err(err) if err.is_transport());
        if answered && !self.result_delay.is_zero() {
            debug!(delay = ?self.result_delay, "Holding result");
            tokio::time::sleep(self.result_delay).await;
        }

        self.state = SubmissionState::from(result);
        &self.state
    }
}
