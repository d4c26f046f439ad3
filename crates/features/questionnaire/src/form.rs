use crate::error::QuestionnaireError;
use moodflag_domain::answers::Choice;
use moodflag_domain::record::{Field, SubmissionRecord};
use std::collections::BTreeMap;
use tracing::trace;

/// Answers collected so far.
///
/// Answers are keyed by field, so the order they arrive in has no effect on
/// the submitted record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    answers: BTreeMap<Field, &'static str>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer by contract key.
    ///
    /// Returns the canonical label that was stored.
    ///
    /// # Errors
    /// [`QuestionnaireError::UnknownField`] for a key outside the catalog and
    /// [`QuestionnaireError::InvalidChoice`] for a value outside its choices.
    pub fn select(&mut self, key: &str, value: &str) -> Result<&'static str, QuestionnaireError> {
        let field = Field::from_key(key)
            .ok_or_else(|| QuestionnaireError::UnknownField { key: key.to_owned(), context: None })?;
        self.select_field(field, value)
    }

    /// Records an answer for a known field; matching ignores ASCII case.
    ///
    /// # Errors
    /// [`QuestionnaireError::InvalidChoice`] if `value` is not one of the
    /// field's choices.
    pub fn select_field(
        &mut self,
        field: Field,
        value: &str,
    ) -> Result<&'static str, QuestionnaireError> {
        let wanted = value.trim();
        let label = field
            .choices()
            .iter()
            .copied()
            .find(|choice| choice.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuestionnaireError::InvalidChoice {
                key: field.key(),
                value: value.to_owned(),
                context: None,
            })?;

        trace!(key = field.key(), "Answer selected");
        self.answers.insert(field, label);
        Ok(label)
    }

    /// The current answer for `field`, falling back to its default.
    #[must_use]
    pub fn answer(&self, field: Field) -> &'static str {
        self.answers.get(&field).copied().unwrap_or(field.choices()[0])
    }

    #[must_use]
    pub fn is_answered(&self, field: Field) -> bool {
        self.answers.contains_key(&field)
    }

    /// Number of explicitly answered questions.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Assembles the record; unanswered questions keep their default choice.
    #[must_use]
    pub fn submit(&self) -> SubmissionRecord {
        SubmissionRecord::builder()
            .gender(self.pick(Field::Gender))
            .country(self.pick(Field::Country))
            .occupation(self.pick(Field::Occupation))
            .self_employed(self.pick(Field::SelfEmployed))
            .family_history(self.pick(Field::FamilyHistory))
            .treatment(self.pick(Field::Treatment))
            .days_indoors(self.pick(Field::DaysIndoors))
            .growing_stress(self.pick(Field::GrowingStress))
            .changes_habits(self.pick(Field::ChangesHabits))
            .mental_health_history(self.pick(Field::MentalHealthHistory))
            .coping_struggles(self.pick(Field::CopingStruggles))
            .work_interest(self.pick(Field::WorkInterest))
            .social_weakness(self.pick(Field::SocialWeakness))
            .mental_health_interview(self.pick(Field::MentalHealthInterview))
            .care_options(self.pick(Field::CareOptions))
            .build()
    }

    fn pick<C: Choice>(&self, field: Field) -> C {
        C::from_label(self.answer(field)).unwrap_or_else(C::first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodflag_domain::answers::{CareOptions, Country, DaysIndoors, Gender};

    #[test]
    fn test_empty_form_submits_defaults() {
        let record = FormState::new().submit();
        assert_eq!(record.gender(), Gender::Male);
        assert_eq!(record.country(), Country::UnitedStates);
        assert_eq!(record.days_indoors(), DaysIndoors::UpToTwoWeeks);
        assert_eq!(record.care_options(), CareOptions::Yes);
    }

    #[test]
    fn test_select_stores_canonical_label() {
        let mut form = FormState::new();
        assert_eq!(form.select("care_options", " not SURE ").unwrap(), "Not sure");
        assert_eq!(form.select("Country", "uk").unwrap(), "UK");
        assert!(form.is_answered(Field::CareOptions));
        assert_eq!(form.answered(), 2);

        let record = form.submit();
        assert_eq!(record.care_options(), CareOptions::NotSure);
        assert_eq!(record.country(), Country::Uk);
    }

    #[test]
    fn test_select_rejects_unknown_key_and_value() {
        let mut form = FormState::new();

        let err = form.select("coping_struggles", "Yes").unwrap_err();
        assert!(matches!(err, QuestionnaireError::UnknownField { .. }));

        let err = form.select("Coping_Struggles", "Maybe").unwrap_err();
        assert_eq!(err.to_string(), "Invalid answer for `Coping_Struggles`: `Maybe`");
        assert_eq!(form.answered(), 0);
    }

    #[test]
    fn test_later_answer_replaces_earlier_one() {
        let mut form = FormState::new();
        form.select("Gender", "Male").unwrap();
        form.select("Gender", "Female").unwrap();
        assert_eq!(form.answer(Field::Gender), "Female");
        assert_eq!(form.submit().gender(), Gender::Female);
    }
}
