use thiserror::Error;

/// Error produced by an [`HttpTransport`](crate::transport::HttpTransport)
/// implementation. Kept opaque so stub and real transports can both report
/// their native error types.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Weather request failed")]
    Transport(#[source] TransportError),

    #[error("Weather provider responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode weather response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}
