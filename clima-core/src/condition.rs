//! Mapping from OpenWeather condition codes to the small set of condition
//! names the UI picks an icon for.
//!
//! See <https://openweathermap.org/weather-conditions> for the code groups.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionName {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    /// Mist, smoke, haze, dust, fog, ash, squalls and tornadoes (7xx).
    Fog,
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
}

impl ConditionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionName::Thunderstorm => "thunderstorm",
            ConditionName::Drizzle => "drizzle",
            ConditionName::Rain => "rain",
            ConditionName::Snow => "snow",
            ConditionName::Fog => "fog",
            ConditionName::Clear => "clear",
            ConditionName::PartlyCloudy => "partly-cloudy",
            ConditionName::Cloudy => "cloudy",
            ConditionName::Overcast => "overcast",
        }
    }

    /// SF Symbols name of the icon shown for this condition.
    pub fn icon(&self) -> &'static str {
        match self {
            ConditionName::Thunderstorm => "cloud.heavy.rain.circle",
            ConditionName::Drizzle => "cloud.drizzle",
            ConditionName::Rain => "cloud.rain.fill",
            ConditionName::Snow => "snowflake",
            ConditionName::Fog => "cloud.fog",
            ConditionName::Clear => "sun.max.fill",
            ConditionName::PartlyCloudy => "cloud.sun",
            ConditionName::Cloudy => "cloud.sun.fill",
            ConditionName::Overcast => "cloud.sun.circle.fill",
        }
    }

    pub const fn all() -> &'static [ConditionName] {
        &[
            ConditionName::Thunderstorm,
            ConditionName::Drizzle,
            ConditionName::Rain,
            ConditionName::Snow,
            ConditionName::Fog,
            ConditionName::Clear,
            ConditionName::PartlyCloudy,
            ConditionName::Cloudy,
            ConditionName::Overcast,
        ]
    }
}

impl fmt::Display for ConditionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a provider condition code. Total: unknown codes map to
/// [`ConditionName::Clear`].
pub fn classify(condition_id: i64) -> ConditionName {
    match condition_id {
        200..=232 => ConditionName::Thunderstorm,
        300..=321 | 520..=531 => ConditionName::Drizzle,
        500..=504 => ConditionName::Rain,
        511 | 600..=622 => ConditionName::Snow,
        700..=781 => ConditionName::Fog,
        800 => ConditionName::Clear,
        801 => ConditionName::PartlyCloudy,
        802 => ConditionName::Cloudy,
        803..=804 => ConditionName::Overcast,
        _ => ConditionName::Clear,
    }
}
