//! # Domain Models
//!
//! Pure types shared by every `MoodFlag` crate: the fifteen answer enums, the
//! [`record::SubmissionRecord`] sent to the prediction service, the
//! [`risk::RiskLevel`] it answers with, and the client configuration tree.
//! Keep it lean: no I/O, networking, or heavy logic.

pub mod answers;
pub mod config;
pub mod constants;
pub mod record;
pub mod risk;
