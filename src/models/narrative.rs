//! Narrative output returned to clients

use serde::{Deserialize, Serialize};

/// Display-ready facts shown next to the narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpliftFacts {
    /// `HH:MM` or `--:--`
    pub sunrise: String,
    pub sunset: String,
    /// `"{h}h {m}m"`
    pub day_length: String,
    /// e.g. `"+2 min"`
    pub delta_yesterday: String,
    pub delta_week: String,
    /// e.g. `"+1h 12m"` or `"-8 min"`
    pub delta_solstice: String,
    pub weather_code: u8,
    /// e.g. `"12°C"`, `"--"` without forecast
    pub temp_max: String,
}

/// Assembled narrative with its facts and emphasised phrases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeText {
    pub text: String,
    pub facts: UpliftFacts,
    /// At most three literal substrings of `text`, four words each at most
    pub highlights: Vec<String>,
}
