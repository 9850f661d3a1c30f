use reqwest::Url;
use std::{fmt, sync::Arc};
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::FetchError,
    model::{WeatherQuery, WeatherReading},
    sink::WeatherSink,
    transport::{HttpTransport, ReqwestTransport},
};

pub mod response;

/// Where to send requests and which key to send them with.
#[derive(Clone)]
pub struct Endpoint {
    base_url: Url,
    api_key: String,
}

impl Endpoint {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .finish()
    }
}

/// Turns a [`WeatherQuery`] into a [`WeatherReading`] with one GET request.
///
/// Holds no mutable state; clones share the transport and can run
/// concurrently.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    endpoint: Endpoint,
    transport: Arc<dyn HttpTransport>,
}

impl WeatherFetcher {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn HttpTransport>) -> Self {
        Self { endpoint, transport }
    }

    /// Fetcher backed by a [`ReqwestTransport`] using the configured timeout.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let endpoint = config.endpoint()?;
        let transport = ReqwestTransport::new(config.timeout())?;

        Ok(Self::new(endpoint, Arc::new(transport)))
    }

    /// Request URL for `query`. Fails with [`FetchError::InvalidQuery`]
    /// without touching the network.
    pub fn request_url(&self, query: &WeatherQuery) -> Result<Url, FetchError> {
        query.validate()?;

        let mut url = self.endpoint.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("appid", &self.endpoint.api_key);
            pairs.append_pair("units", "metric");

            match query {
                WeatherQuery::City(name) => {
                    pairs.append_pair("q", name.trim());
                }
                WeatherQuery::Coordinates {
                    latitude,
                    longitude,
                } => {
                    pairs.append_pair("lat", &latitude.to_string());
                    pairs.append_pair("lon", &longitude.to_string());
                }
            }
        }

        Ok(url)
    }

    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReading, FetchError> {
        let url = self.request_url(query)?;
        debug!(url = %redact_api_key(&url), "requesting current weather");

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(FetchError::Transport)?;

        if !response.is_success() {
            let message = response::error_message(&response.body);
            warn!(status = response.status, %message, "weather provider returned an error");
            return Err(FetchError::Status {
                status: response.status,
                message,
            });
        }

        let reading = response::decode_reading(&response.body)?;
        debug!(
            city = reading.city_name(),
            temperature = reading.temperature_celsius(),
            condition = %reading.condition_name(),
            "decoded weather reading"
        );

        Ok(reading)
    }

    /// Run [`fetch`](Self::fetch) and report the outcome to `sink`: exactly
    /// one of `on_reading` or `on_error` is called.
    pub async fn fetch_into<S>(&self, query: &WeatherQuery, sink: &S)
    where
        S: WeatherSink + ?Sized,
    {
        match self.fetch(query).await {
            Ok(reading) => sink.on_reading(reading),
            Err(err) => sink.on_error(err),
        }
    }
}

fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
