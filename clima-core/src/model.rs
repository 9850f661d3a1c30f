use serde::{Deserialize, Serialize};

use crate::{
    condition::{ConditionName, classify},
    error::FetchError,
};

/// What to fetch weather for: a city typed by the user, or a device location.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        WeatherQuery::City(name.into())
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        WeatherQuery::Coordinates { latitude, longitude }
    }

    /// Reject queries that must never reach the network.
    pub fn validate(&self) -> Result<(), FetchError> {
        match self {
            WeatherQuery::City(name) => {
                if name.trim().is_empty() {
                    return Err(FetchError::InvalidQuery("city name is empty".to_string()));
                }
            }
            WeatherQuery::Coordinates { latitude, longitude } => {
                // NaN fails both range checks.
                if !(-90.0..=90.0).contains(latitude) {
                    return Err(FetchError::InvalidQuery(format!(
                        "latitude {latitude} is outside -90..=90"
                    )));
                }
                if !(-180.0..=180.0).contains(longitude) {
                    return Err(FetchError::InvalidQuery(format!(
                        "longitude {longitude} is outside -180..=180"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Current conditions for one location, as returned by a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    condition_id: i64,
    city_name: String,
    temperature_celsius: f64,
}

impl WeatherReading {
    pub fn new(condition_id: i64, city_name: impl Into<String>, temperature_celsius: f64) -> Self {
        Self {
            condition_id,
            city_name: city_name.into(),
            temperature_celsius,
        }
    }

    pub fn condition_id(&self) -> i64 {
        self.condition_id
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_celsius
    }

    pub fn condition_name(&self) -> ConditionName {
        classify(self.condition_id)
    }

    /// Temperature with exactly one fractional digit, halves rounded away
    /// from zero (`18.25` -> `"18.3"`).
    pub fn formatted_temperature(&self) -> String {
        let t = self.temperature_celsius;
        let scaled = t * 10.0;
        if !scaled.is_finite() {
            return format!("{t:.1}");
        }

        // `+ 0.0` turns a rounded `-0.0` into `0.0`.
        let rounded = scaled.round() / 10.0 + 0.0;
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let err = WeatherQuery::city(name).validate().unwrap_err();
            assert!(matches!(err, FetchError::InvalidQuery(_)), "name {name:?}");
        }
        assert!(WeatherQuery::city(" Paris ").validate().is_ok());
    }

    #[test]
    fn coordinate_query_bounds_are_inclusive() {
        assert!(WeatherQuery::coordinates(90.0, 180.0).validate().is_ok());
        assert!(WeatherQuery::coordinates(-90.0, -180.0).validate().is_ok());
        assert!(WeatherQuery::coordinates(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn coordinate_query_rejects_out_of_range_and_nan() {
        let cases = [
            (90.5, 0.0),
            (-90.01, 0.0),
            (0.0, 180.1),
            (0.0, -180.1),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ];
        for (lat, lon) in cases {
            let err = WeatherQuery::coordinates(lat, lon).validate().unwrap_err();
            assert!(matches!(err, FetchError::InvalidQuery(_)), "({lat}, {lon})");
        }
    }

    #[test]
    fn formatted_temperature_has_one_decimal() {
        assert_eq!(WeatherReading::new(800, "X", 21.3).formatted_temperature(), "21.3");
        assert_eq!(WeatherReading::new(800, "X", 18.25).formatted_temperature(), "18.3");
        assert_eq!(WeatherReading::new(800, "X", 7.0).formatted_temperature(), "7.0");
        assert_eq!(WeatherReading::new(800, "X", -3.45).formatted_temperature(), "-3.5");
        assert_eq!(WeatherReading::new(800, "X", -0.04).formatted_temperature(), "0.0");
    }

    #[test]
    fn formatted_temperature_stays_finite_for_huge_values() {
        for t in [1e308, -1e308, f64::MAX] {
            let formatted = WeatherReading::new(800, "X", t).formatted_temperature();
            assert_eq!(formatted, format!("{t:.1}"));
            assert!(!formatted.contains("inf"), "{formatted}");
        }
    }

    #[test]
    fn condition_name_is_derived_from_id() {
        let reading = WeatherReading::new(502, "Bergen", 9.0);
        assert_eq!(reading.condition_name(), ConditionName::Rain);
        assert_eq!(reading.condition_id(), 502);
        assert_eq!(reading.city_name(), "Bergen");
    }
}
