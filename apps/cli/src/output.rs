//! Terminal presentation of the questionnaire and its outcome.

use moodflag::domain::record::SubmissionRecord;
use moodflag::domain::risk::Tone;
use moodflag::features::prediction::SubmissionState;
use moodflag::features::questionnaire::render_record;
use std::io::{self, Write};

const INTRO: &str = "\
MoodFlag - mood swing risk check

Mood swings are sudden and intense changes in emotional state. Occasional
shifts are normal, but frequent or extreme ones can signal deeper mental
health challenges. Answer the questions below to get an estimate of your
risk based on your habits, stress levels and lifestyle changes.";

const PENDING: &str = "Wait for it...";

const DISCLAIMER: &str = "\
Disclaimer:
This app is a personal hobby project created for educational and demonstration
purposes only. It is not a substitute for professional medical advice,
diagnosis, or treatment. If you're experiencing emotional distress or
struggling with your mental health, please consult with a licensed therapist,
counselor, or mental health professional.
Your well-being matters.";

/// Writes the user-facing text, optionally with ANSI colors.
#[derive(Debug)]
pub(crate) struct Screen<W> {
    out: W,
    color: bool,
}

impl<W: Write> Screen<W> {
    pub(crate) const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub(crate) fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub(crate) fn intro(&mut self) -> io::Result<()> {
        writeln!(self.out, "{INTRO}")
    }

    pub(crate) fn record(&mut self, record: &SubmissionRecord) -> io::Result<()> {
        write!(self.out, "\n{}", render_record(record))
    }

    pub(crate) fn pending(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{PENDING}")?;
        self.out.flush()
    }

    pub(crate) fn outcome(&mut self, state: &SubmissionState) -> io::Result<()> {
        let Some(notice) = state.render() else {
            return Ok(());
        };
        if let Some(badge) = notice.badge {
            let badge = format!("[{badge}]");
            writeln!(self.out, "{}", self.paint(Tone::Success, &badge))?;
        }
        writeln!(self.out, "{}", self.paint(notice.tone, &notice.text))
    }

    pub(crate) fn disclaimer(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{DISCLAIMER}")?;
        self.out.flush()
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_owned();
        }
        let code = match tone {
            Tone::Warning => "33",
            Tone::Success => "32",
            Tone::Info => "34",
            Tone::Error => "31",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodflag::domain::risk::RiskLevel;

    fn rendered(state: &SubmissionState, color: bool) -> String {
        let mut screen = Screen::new(Vec::new(), color);
        screen.outcome(state).unwrap();
        String::from_utf8(screen.out).unwrap()
    }

    #[test]
    fn test_success_has_badge_then_message() {
        let text = rendered(&SubmissionState::Success(RiskLevel::High), false);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[Success]"));
        assert_eq!(lines.next(), Some(RiskLevel::High.message()));
    }

    #[test]
    fn test_errors_have_no_badge() {
        let text = rendered(&SubmissionState::ServerError("invalid country".to_owned()), false);
        assert_eq!(text, "Error: invalid country\n");
    }

    #[test]
    fn test_pending_state_prints_nothing() {
        assert!(rendered(&SubmissionState::Submitting, false).is_empty());
    }

    #[test]
    fn test_color_wraps_text() {
        let text = rendered(&SubmissionState::TransportError("refused".to_owned()), true);
        assert!(text.starts_with("\x1b[31mFailed to connect to prediction API: refused"));
        assert!(text.trim_end().ends_with("\x1b[0m"));
    }
}
