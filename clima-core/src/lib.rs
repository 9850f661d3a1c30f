//! Core library for Clima.
//!
//! This crate defines:
//! - Condition-code classification
//! - The query / reading domain model
//! - A fetcher that shapes the OpenWeather request, sends it through an
//!   injected transport and decodes the response
//! - Configuration & credentials handling
//!
//! It is used by `clima-cli`, but any other front end can drive the same
//! [`WeatherFetcher`].

pub mod condition;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod sink;
pub mod transport;

pub use condition::{ConditionName, classify};
pub use config::Config;
pub use error::{FetchError, TransportError};
pub use fetcher::{Endpoint, WeatherFetcher};
pub use model::{WeatherQuery, WeatherReading};
pub use sink::{WeatherSink, WeatherUpdate};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
