//! # Questionnaire
//!
//! The fifteen questions of the mood swing assessment, each restricted to a
//! closed set of answers, and the pieces that turn answers into a
//! [`SubmissionRecord`](moodflag_domain::record::SubmissionRecord):
//!
//! - [`Questionnaire::catalog`] lists the questions in presentation order;
//! - [`FormState`] collects answers in any order and assembles the record;
//! - [`Prompter`] asks the questions over a terminal (or any reader/writer);
//! - [`render_record`] prints the "Your Data" summary table.
mod catalog;
mod error;
mod form;
mod prompt;
mod render;

pub use catalog::{Question, Questionnaire};
pub use error::{QuestionnaireError, QuestionnaireErrorExt};
pub use form::FormState;
pub use prompt::Prompter;
pub use render::{RecordTable, TABLE_TITLE, render_record};
