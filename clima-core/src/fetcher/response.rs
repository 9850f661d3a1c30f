//! Wire format of the OpenWeather "current weather" endpoint.
//!
//! Only the fields a [`WeatherReading`] needs are required; everything else
//! in the payload (`coord`, `sys`, `wind`, ...) is ignored.

use serde::Deserialize;

use crate::{error::FetchError, model::WeatherReading};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWeatherResponse {
    pub name: String,
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMain {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCondition {
    pub id: i64,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Error object OpenWeather returns alongside non-2xx statuses, e.g.
/// `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

impl RawWeatherResponse {
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub fn into_reading(self) -> Result<WeatherReading, FetchError> {
        let condition = self
            .weather
            .first()
            .ok_or_else(|| FetchError::Decode("`weather` array is empty".to_string()))?;

        Ok(WeatherReading::new(condition.id, self.name, self.main.temp))
    }
}

pub fn decode_reading(body: &str) -> Result<WeatherReading, FetchError> {
    RawWeatherResponse::from_json(body)?.into_reading()
}

/// Human-readable reason for a failed request: the provider's own message
/// when present, otherwise the start of the body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ProviderError>(body) {
        Ok(err) => err.message,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
