//! Closed answer sets of the questionnaire.
//!
//! Every enum serializes to (and parses from) the exact label the prediction
//! service was trained on. Parsing is ASCII case-insensitive so `"yes"` and
//! `"Yes"` both select [`YesNo::Yes`].

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

/// A closed set of labelled answers.
pub trait Choice: Copy + Eq + VariantArray + Into<&'static str> + 'static {
    /// Labels in presentation order; the first one is the default selection.
    const LABELS: &'static [&'static str];

    /// The wire label of this answer.
    fn label(self) -> &'static str {
        self.into()
    }

    /// Looks up an answer by its label, ignoring ASCII case.
    fn from_label(label: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.label().eq_ignore_ascii_case(label.trim()))
    }

    /// The pre-selected answer.
    fn first() -> Self {
        Self::VARIANTS[0]
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
            Display, EnumString, IntoStaticStr, VariantArray,
        )]
        #[strum(ascii_case_insensitive)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                #[strum(serialize = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            const LABELS: &'static [&'static str] = &[$($label),+];
        }
    };
}

choice_enum! {
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

choice_enum! {
    /// Countries the service model knows about.
    Country {
        UnitedStates => "United States",
        Uk => "UK",
        Canada => "Canada",
        Australia => "Australia",
        Netherlands => "Netherlands",
        Ireland => "Ireland",
        Germany => "Germany",
        Sweden => "Sweden",
        India => "India",
        France => "France",
        Portugal => "Portugal",
        Brazil => "Brazil",
        CostaRica => "Costa Rica",
        Russia => "Russia",
        Switzerland => "Switzerland",
        Finland => "Finland",
        Israel => "Israel",
        Italy => "Italy",
        BosniaAndHerzegovina => "Bosnia and Herzegovina",
        Singapore => "Singapore",
        Nigeria => "Nigeria",
        Croatia => "Croatia",
        Thailand => "Thailand",
        Denmark => "Denmark",
        Mexico => "Mexico",
        Greece => "Greece",
        Moldova => "Moldova",
        Colombia => "Colombia",
        Georgia => "Georgia",
        CzechRepublic => "Czech Republic",
        Philippines => "Philippines",
    }
}

choice_enum! {
    Occupation {
        Student => "Student",
        Corporate => "Corporate",
        Business => "Business",
        Housewife => "Housewife",
        Other => "Other",
    }
}

choice_enum! {
    YesNo {
        Yes => "Yes",
        No => "No",
    }
}

choice_enum! {
    YesNoMaybe {
        Yes => "Yes",
        No => "No",
        Maybe => "Maybe",
    }
}

choice_enum! {
    /// How much time is spent indoors.
    DaysIndoors {
        UpToTwoWeeks => "1-14 days",
        GoOutEveryDay => "Go out Every day",
        MoreThanTwoMonths => "More than 2 months",
        HalfToOneMonth => "15-30 days",
    }
}

choice_enum! {
    /// Awareness of mental health care options.
    CareOptions {
        Yes => "Yes",
        No => "No",
        NotSure => "Not sure",
    }
}
