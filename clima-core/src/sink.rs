//! Callback-style delivery of fetch outcomes, for callers that prefer to be
//! notified rather than await a result.

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{error::FetchError, model::WeatherReading};

/// Receives the outcome of one fetch. See
/// [`WeatherFetcher::fetch_into`](crate::fetcher::WeatherFetcher::fetch_into).
pub trait WeatherSink: Send + Sync {
    fn on_reading(&self, reading: WeatherReading);
    fn on_error(&self, error: FetchError);
}

#[derive(Debug)]
pub enum WeatherUpdate {
    Reading(WeatherReading),
    Error(FetchError),
}

impl From<Result<WeatherReading, FetchError>> for WeatherUpdate {
    fn from(result: Result<WeatherReading, FetchError>) -> Self {
        match result {
            Ok(reading) => WeatherUpdate::Reading(reading),
            Err(err) => WeatherUpdate::Error(err),
        }
    }
}

impl WeatherSink for UnboundedSender<WeatherUpdate> {
    fn on_reading(&self, reading: WeatherReading) {
        if self.send(WeatherUpdate::Reading(reading)).is_err() {
            debug!("weather update dropped: receiver closed");
        }
    }

    fn on_error(&self, error: FetchError) {
        if self.send(WeatherUpdate::Error(error)).is_err() {
            debug!("weather update dropped: receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl WeatherSink for Recorder {
        fn on_reading(&self, reading: WeatherReading) {
            self.events.lock().unwrap().push(format!("reading:{}", reading.city_name()));
        }

        fn on_error(&self, error: FetchError) {
            self.events.lock().unwrap().push(format!("error:{error}"));
        }
    }

    #[test]
    fn trait_objects_receive_callbacks() {
        let recorder = Recorder::default();
        let sink: &dyn WeatherSink = &recorder;

        sink.on_reading(WeatherReading::new(800, "Lima", 19.0));
        sink.on_error(FetchError::Decode("bad".into()));

        let events = recorder.events.lock().unwrap();
        assert_eq!(events.as_slice(), ["reading:Lima", "error:Failed to decode weather response: bad"]);
    }

    #[test]
    fn sending_to_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        tx.on_reading(WeatherReading::new(800, "Lima", 19.0));
        tx.on_error(FetchError::InvalidQuery("empty".into()));
    }

    #[test]
    fn update_from_result() {
        let ok: WeatherUpdate = Ok(WeatherReading::new(800, "Lima", 19.0)).into();
        assert!(matches!(ok, WeatherUpdate::Reading(_)));

        let err: WeatherUpdate = Err(FetchError::Decode("x".into())).into();
        assert!(matches!(err, WeatherUpdate::Error(FetchError::Decode(_))));
    }
}
