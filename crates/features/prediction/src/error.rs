use std::borrow::Cow;

/// A specialized [`PredictionError`] enum of this crate.
#[moodflag_derive::moodflag_error]
pub enum PredictionError {
    /// The configured service address cannot be used.
    #[error("Invalid prediction config{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The service answered with a non-200 status and a `detail` message.
    #[error("Prediction rejected with status {status}{}: {detail}", format_context(.context))]
    Rejected { status: u16, detail: String, context: Option<Cow<'static, str>> },

    /// The request never produced a readable response.
    #[error("{}{}", describe_transport(.source), format_context(.context))]
    Transport {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    /// The service answered, but not in the agreed shape (including a body
    /// that is not JSON at all).
    #[error("Malformed prediction response{}: {message}", format_context(.context))]
    MalformedResponse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal prediction error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PredictionError {
    /// The server-supplied detail of a rejection.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether the failure happened before a usable response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Flattens a transport error and its causes into one line.
fn describe_transport(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut cause = std::error::Error::source(err);
    while let Some(inner) = cause {
        let part = inner.to_string();
        if !text.contains(&part) {
            text.push_str(": ");
            text.push_str(&part);
        }
        cause = inner.source();
    }
    text
}
