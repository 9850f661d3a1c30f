use anyhow::{Context, Result};
use clima_core::{ConditionName, WeatherQuery, WeatherReading};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReadingView<'a> {
    city_name: &'a str,
    temperature_celsius: f64,
    formatted_temperature: String,
    condition_id: i64,
    condition_name: ConditionName,
    icon: &'static str,
}

pub fn human(reading: &WeatherReading) -> String {
    let condition = reading.condition_name();
    format!(
        "{}  {}°C  {} ({})",
        reading.city_name(),
        reading.formatted_temperature(),
        condition,
        condition.icon()
    )
}

pub fn json(reading: &WeatherReading) -> Result<String> {
    let condition = reading.condition_name();
    let view = ReadingView {
        city_name: reading.city_name(),
        temperature_celsius: reading.temperature_celsius(),
        formatted_temperature: reading.formatted_temperature(),
        condition_id: reading.condition_id(),
        condition_name: condition,
        icon: condition.icon(),
    };

    serde_json::to_string_pretty(&view).context("Failed to serialize reading to JSON")
}

pub fn describe(query: &WeatherQuery) -> String {
    match query {
        WeatherQuery::City(name) => format!("'{}'", name.trim()),
        WeatherQuery::Coordinates {
            latitude,
            longitude,
        } => format!("({latitude}, {longitude})"),
    }
}
