//! Risk categories returned by the prediction service.

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// Mood swing risk as classified by the service.
///
/// The service answers with an integer code whose meaning is fixed by the
/// service contract and is *not* ordered by severity: `0` is high, `1` is low,
/// `2` is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    High,
    Low,
    Medium,
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Warning,
    Success,
    Info,
    Error,
}

/// A code outside `{0, 1, 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRiskCode(pub i64);

impl std::fmt::Display for UnknownRiskCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown risk code {}", self.0)
    }
}

impl std::error::Error for UnknownRiskCode {}

impl TryFrom<i64> for RiskLevel {
    type Error = UnknownRiskCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::High),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            other => Err(UnknownRiskCode(other)),
        }
    }
}

impl RiskLevel {
    /// The wire code of this level.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::High => 0,
            Self::Low => 1,
            Self::Medium => 2,
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Warning,
            Self::Low => Tone::Success,
            Self::Medium => Tone::Info,
        }
    }

    /// The fixed user-facing message for this level.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::High => {
                "High risk of mood swings detected. It's important to seek support or talk to a mental health professional."
            },
            Self::Low => "Low risk of mood swings detected. Keep up the good habits!",
            Self::Medium => {
                "Medium risk of mood swings detected. Consider monitoring your mental health and seeking support if needed."
            },
        }
    }
}
