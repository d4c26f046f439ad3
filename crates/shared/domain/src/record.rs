//! The record submitted to the prediction service.

use crate::answers::{
    CareOptions, Choice, Country, DaysIndoors, Gender, Occupation, YesNo, YesNoMaybe,
};
use crate::constants;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, VariantArray};
use typed_builder::TypedBuilder;

/// One question of the form, identified by its contract key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, VariantArray, EnumCount)]
pub enum Field {
    Gender,
    Country,
    Occupation,
    SelfEmployed,
    FamilyHistory,
    Treatment,
    DaysIndoors,
    GrowingStress,
    ChangesHabits,
    MentalHealthHistory,
    CopingStruggles,
    WorkInterest,
    SocialWeakness,
    MentalHealthInterview,
    CareOptions,
}

impl Field {
    /// JSON key expected by the prediction service.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gender => constants::GENDER,
            Self::Country => constants::COUNTRY,
            Self::Occupation => constants::OCCUPATION,
            Self::SelfEmployed => constants::SELF_EMPLOYED,
            Self::FamilyHistory => constants::FAMILY_HISTORY,
            Self::Treatment => constants::TREATMENT,
            Self::DaysIndoors => constants::DAYS_INDOORS,
            Self::GrowingStress => constants::GROWING_STRESS,
            Self::ChangesHabits => constants::CHANGES_HABITS,
            Self::MentalHealthHistory => constants::MENTAL_HEALTH_HISTORY,
            Self::CopingStruggles => constants::COPING_STRUGGLES,
            Self::WorkInterest => constants::WORK_INTEREST,
            Self::SocialWeakness => constants::SOCIAL_WEAKNESS,
            Self::MentalHealthInterview => constants::MENTAL_HEALTH_INTERVIEW,
            Self::CareOptions => constants::CARE_OPTIONS,
        }
    }

    /// Allowed labels for this field, default first.
    #[must_use]
    pub const fn choices(self) -> &'static [&'static str] {
        match self {
            Self::Gender => Gender::LABELS,
            Self::Country => Country::LABELS,
            Self::Occupation => Occupation::LABELS,
            Self::SelfEmployed | Self::FamilyHistory | Self::Treatment | Self::CopingStruggles => {
                YesNo::LABELS
            },
            Self::DaysIndoors => DaysIndoors::LABELS,
            Self::GrowingStress
            | Self::ChangesHabits
            | Self::MentalHealthHistory
            | Self::WorkInterest
            | Self::SocialWeakness
            | Self::MentalHealthInterview => YesNoMaybe::LABELS,
            Self::CareOptions => CareOptions::LABELS,
        }
    }

    /// Resolves a contract key back to its field.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        use strum::VariantArray as _;
        Self::VARIANTS.iter().copied().find(|f| f.key() == key)
    }
}

/// The fifteen answers of one submission.
///
/// Every field is required by the builder at compile time, and each value is a
/// closed enum, so a built record always satisfies the service contract. The
/// record is immutable; it exists only for the request it is sent with.
///
/// Serialization emits the keys in [`Field`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(deny_unknown_fields)]
pub struct SubmissionRecord {
    #[serde(rename = "Gender")]
    gender: Gender,
    #[serde(rename = "Country")]
    country: Country,
    #[serde(rename = "Occupation")]
    occupation: Occupation,
    #[serde(rename = "self_employed")]
    self_employed: YesNo,
    #[serde(rename = "family_history")]
    family_history: YesNo,
    #[serde(rename = "treatment")]
    treatment: YesNo,
    #[serde(rename = "Days_Indoors")]
    days_indoors: DaysIndoors,
    #[serde(rename = "Growing_Stress")]
    growing_stress: YesNoMaybe,
    #[serde(rename = "Changes_Habits")]
    changes_habits: YesNoMaybe,
    #[serde(rename = "Mental_Health_History")]
    mental_health_history: YesNoMaybe,
    #[serde(rename = "Coping_Struggles")]
    coping_struggles: YesNo,
    #[serde(rename = "Work_Interest")]
    work_interest: YesNoMaybe,
    #[serde(rename = "Social_Weakness")]
    social_weakness: YesNoMaybe,
    #[serde(rename = "mental_health_interview")]
    mental_health_interview: YesNoMaybe,
    #[serde(rename = "care_options")]
    care_options: CareOptions,
}

impl SubmissionRecord {
    /// The wire label answered for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &'static str {
        match field {
            Field::Gender => self.gender.label(),
            Field::Country => self.country.label(),
            Field::Occupation => self.occupation.label(),
            Field::SelfEmployed => self.self_employed.label(),
            Field::FamilyHistory => self.family_history.label(),
            Field::Treatment => self.treatment.label(),
            Field::DaysIndoors => self.days_indoors.label(),
            Field::GrowingStress => self.growing_stress.label(),
            Field::ChangesHabits => self.changes_habits.label(),
            Field::MentalHealthHistory => self.mental_health_history.label(),
            Field::CopingStruggles => self.coping_struggles.label(),
            Field::WorkInterest => self.work_interest.label(),
            Field::SocialWeakness => self.social_weakness.label(),
            Field::MentalHealthInterview => self.mental_health_interview.label(),
            Field::CareOptions => self.care_options.label(),
        }
    }

    /// `(key, label)` pairs in [`Field`] order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        use strum::VariantArray as _;
        Field::VARIANTS.iter().map(|&f| (f.key(), self.get(f)))
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    #[must_use]
    pub const fn occupation(&self) -> Occupation {
        self.occupation
    }

    #[must_use]
    pub const fn days_indoors(&self) -> DaysIndoors {
        self.days_indoors
    }

    #[must_use]
    pub const fn care_options(&self) -> CareOptions {
        self.care_options
    }
}
