use thiserror::Error;

/// Failure below the HTTP layer: the request never produced a status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connect(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("transport error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered 401; the navigator has already been sent to login.
    #[error("not authenticated")]
    Unauthorized,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<serde_html_form::ser::Error> for ClientError {
    fn from(err: serde_html_form::ser::Error) -> Self {
        ClientError::Encode(err.to_string())
    }
}
