//! Wire-level names of the prediction contract.

/// Path appended to the configured base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Success body field holding the risk code.
pub const PREDICTION_FIELD: &str = "prediction";

/// Error body field holding the server message.
pub const DETAIL_FIELD: &str = "detail";

pub const GENDER: &str = "Gender";
pub const COUNTRY: &str = "Country";
pub const OCCUPATION: &str = "Occupation";
pub const SELF_EMPLOYED: &str = "self_employed";
pub const FAMILY_HISTORY: &str = "family_history";
pub const TREATMENT: &str = "treatment";
pub const DAYS_INDOORS: &str = "Days_Indoors";
pub const GROWING_STRESS: &str = "Growing_Stress";
pub const CHANGES_HABITS: &str = "Changes_Habits";
pub const MENTAL_HEALTH_HISTORY: &str = "Mental_Health_History";
pub const COPING_STRUGGLES: &str = "Coping_Struggles";
pub const WORK_INTEREST: &str = "Work_Interest";
pub const SOCIAL_WEAKNESS: &str = "Social_Weakness";
pub const MENTAL_HEALTH_INTERVIEW: &str = "mental_health_interview";
pub const CARE_OPTIONS: &str = "care_options";
