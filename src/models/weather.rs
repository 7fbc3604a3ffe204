//! WMO weather codes and their classification

use serde::{Deserialize, Serialize};

/// Coarse sky condition used to pick nature observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Clear,
    Grey,
    Rain,
    Snow,
}

/// WMO weather interpretation code as reported by Open-Meteo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u8);

impl WeatherCode {
    /// Clear to partly cloudy skies
    #[must_use]
    pub fn is_good(self) -> bool {
        matches!(self.0, 0..=2)
    }

    /// Any form of precipitation or thunder
    #[must_use]
    pub fn is_bad(self) -> bool {
        matches!(self.0, 51..=67 | 71..=77 | 80..=86 | 95..=99)
    }

    #[must_use]
    pub fn category(self) -> WeatherCategory {
        match self.0 {
            0 | 1 => WeatherCategory::Clear,
            71..=77 | 85 | 86 => WeatherCategory::Snow,
            51..=67 | 80..=82 | 95..=99 => WeatherCategory::Rain,
            _ => WeatherCategory::Grey,
        }
    }
}
