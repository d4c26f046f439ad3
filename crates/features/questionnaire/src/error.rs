use std::borrow::Cow;

/// A specialized [`QuestionnaireError`] enum of this crate.
#[moodflag_derive::moodflag_error]
pub enum QuestionnaireError {
    /// The key is not one of the fifteen contract keys.
    #[error("Unknown question{}: `{key}`", format_context(.context))]
    UnknownField { key: String, context: Option<Cow<'static, str>> },

    /// The value is outside the question's choice set.
    #[error("Invalid answer for `{key}`{}: `{value}`", format_context(.context))]
    InvalidChoice { key: &'static str, value: String, context: Option<Cow<'static, str>> },

    /// Input ended before every question was answered.
    #[error("Questionnaire aborted{}: {message}", format_context(.context))]
    Aborted { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Reading answers or writing prompts failed.
    #[error("Questionnaire I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal questionnaire error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
