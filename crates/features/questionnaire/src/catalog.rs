use moodflag_domain::record::Field;
use strum::EnumCount;

/// One question as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub field: Field,
    pub label: &'static str,
}

impl Question {
    /// Contract key the answer is sent under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.field.key()
    }

    #[must_use]
    pub const fn choices(&self) -> &'static [&'static str] {
        self.field.choices()
    }

    /// The pre-selected answer, used when the question is skipped.
    #[must_use]
    pub const fn default_choice(&self) -> &'static str {
        self.field.choices()[0]
    }
}

/// The fixed question catalog.
#[derive(Debug, Clone, Copy)]
pub struct Questionnaire;

impl Questionnaire {
    /// All fifteen questions in presentation order.
    ///
    /// Demographics and history come first, then the recent-habits block,
    /// then care awareness. This is not the wire key order; the record
    /// serializes in its own fixed order regardless.
    #[must_use]
    pub const fn catalog() -> &'static [Question] {
        &CATALOG
    }

    /// The question asked for `field`.
    #[must_use]
    pub fn question(field: Field) -> Option<&'static Question> {
        Self::catalog().iter().find(|q| q.field == field)
    }
}

const CATALOG: [Question; Field::COUNT] = [
    Question { field: Field::Gender, label: "Gender" },
    Question { field: Field::Country, label: "Country" },
    Question { field: Field::Occupation, label: "Occupation" },
    Question { field: Field::SelfEmployed, label: "Self-Employed" },
    Question { field: Field::FamilyHistory, label: "Family history of Mental Illness" },
    Question { field: Field::Treatment, label: "Have you ever sought treatment?" },
    Question {
        field: Field::MentalHealthInterview,
        label: "Reveal mental health issue in interview?",
    },
    Question { field: Field::DaysIndoors, label: "Days indoors" },
    Question { field: Field::GrowingStress, label: "Growing Stress" },
    Question { field: Field::ChangesHabits, label: "Noticed habit changes" },
    Question { field: Field::MentalHealthHistory, label: "Mental health history" },
    Question { field: Field::CopingStruggles, label: "Struggle with stress" },
    Question { field: Field::WorkInterest, label: "Lost interest in work" },
    Question { field: Field::SocialWeakness, label: "Avoiding social interaction" },
    Question { field: Field::CareOptions, label: "Know mental health care options" },
];
