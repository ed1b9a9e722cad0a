use thiserror::Error;

/// Failure modes of a single weather fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, non-success HTTP status, or a body that is
    /// not valid JSON.
    #[error("network error: {0}")]
    Network(String),

    /// Well-formed JSON response missing the numeric `main.temp` field.
    #[error("weather data missing from response")]
    DataUnavailable,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Error conditions the presenter can show in place of a city name.
///
/// Each is terminal for that attempt and non-fatal to the process; the
/// only recovery path is a new location fix or a manual refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    DataUnavailable,
    LocationUnavailable,
    LocationDenied,
}

impl ErrorKind {
    /// Fixed placeholder text rendered in place of the city name.
    pub const fn placeholder(self) -> &'static str {
        match self {
            ErrorKind::Network => "Network Error",
            ErrorKind::DataUnavailable => "Unavailable",
            ErrorKind::LocationUnavailable | ErrorKind::LocationDenied => "Location Unavailable",
        }
    }
}

impl From<&FetchError> for ErrorKind {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Network(_) => ErrorKind::Network,
            FetchError::DataUnavailable => ErrorKind::DataUnavailable,
        }
    }
}
