use crate::catalog::{Question, Questionnaire};
use crate::error::{QuestionnaireError, QuestionnaireErrorExt};
use crate::form::FormState;
use moodflag_domain::record::SubmissionRecord;
use std::io::{BufRead, Write};
use tracing::debug;

/// Questions with more choices than this are laid out in columns.
const COLUMN_THRESHOLD: usize = 8;
const COLUMNS: usize = 3;

/// Interactive form driver over any line-based input and output.
///
/// Each question shows a numbered menu. An answer is either the 1-based
/// number or the choice text (ASCII case-insensitive); an empty line keeps
/// the default. Anything else re-asks the same question. End of input aborts
/// the form.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks every catalog question in order and assembles the record.
    ///
    /// # Errors
    /// [`QuestionnaireError::Aborted`] when input ends early and
    /// [`QuestionnaireError::Io`] when reading or writing fails.
    pub fn run(&mut self) -> Result<SubmissionRecord, QuestionnaireError> {
        let mut form = FormState::new();
        let catalog = Questionnaire::catalog();

        for (index, question) in catalog.iter().enumerate() {
            writeln!(self.output, "\n[{}/{}] {}", index + 1, catalog.len(), question.label)
                .context("Failed to write prompt")?;
            self.ask(&mut form, question)?;
        }

        debug!(answered = form.answered(), "Questionnaire complete");
        Ok(form.submit())
    }

    /// Hands back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, form: &mut FormState, question: &Question) -> Result<(), QuestionnaireError> {
        self.print_menu(question).context("Failed to write prompt")?;

        loop {
            write!(self.output, "Choice [{}]: ", question.default_choice())
                .and_then(|()| self.output.flush())
                .context("Failed to write prompt")?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw).context("Failed to read answer")? == 0 {
                return Err(QuestionnaireError::Aborted {
                    message: format!("no answer for `{}`", question.key()).into(),
                    context: None,
                });
            }

            // Undecodable lines get the same hint as any other unknown answer.
            let line = String::from_utf8(raw).ok();
            if let Some(label) = line.as_deref().and_then(|line| resolve(question, line.trim())) {
                form.select_field(question.field, label)?;
                return Ok(());
            }

            writeln!(
                self.output,
                "Please enter a number from 1 to {} or one of the listed answers.",
                question.choices().len()
            )
            .context("Failed to write prompt")?;
        }
    }

    fn print_menu(&mut self, question: &Question) -> std::io::Result<()> {
        let choices = question.choices();
        if choices.len() <= COLUMN_THRESHOLD {
            for (index, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {:>2}) {choice}", index + 1)?;
            }
            return Ok(());
        }

        let width = choices.iter().map(|c| c.len()).max().unwrap_or_default();
        for (row, chunk) in choices.chunks(COLUMNS).enumerate() {
            write!(self.output, " ")?;
            for (col, choice) in chunk.iter().enumerate() {
                let number = row * COLUMNS + col + 1;
                write!(self.output, " {number:>2}) {choice:<width$}")?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }
}

/// Maps one line of input to a choice of `question`.
fn resolve(question: &Question, input: &str) -> Option<&'static str> {
    let choices = question.choices();
    if input.is_empty() {
        return Some(question.default_choice());
    }
    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1).and_then(|index| choices.get(index)).copied();
    }
    choices.iter().copied().find(|choice| choice.eq_ignore_ascii_case(input))
}
