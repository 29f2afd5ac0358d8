use thiserror::Error;

/// Failure of a single outbound API call.
///
/// Every variant is terminal for the call that produced it; nothing in this
/// crate retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with something other than 200 OK
    #[error("request failed with status code: {status}")]
    HttpStatus { status: u16 },
    /// The body was not the JSON shape we expect
    #[error("could not decode response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Returns the HTTP status code for [`RequestError::HttpStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Exchanging client credentials for an access token failed
    #[error("Authentication failed: {0}")]
    AuthError(RequestError),
    /// Retrieving or decoding the listing collection failed
    #[error("Failed to fetch animals: {0}")]
    FetchError(RequestError),
    /// Client id or secret was not supplied
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
    /// Configuration file could not be read or validated
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

/// Maps a reqwest failure onto the request taxonomy.
///
/// Status errors keep their code; body and decode failures are reported as
/// decode errors; everything else is transport.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            RequestError::HttpStatus {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
