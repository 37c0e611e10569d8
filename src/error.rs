//! Error types for Vital-Stats-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::domain::geography::GeoId;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The statistics API answered with a non-2xx status
    #[snafu(display("HTTP {status} from {endpoint}"))]
    Status { endpoint: String, status: u16 },

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[snafu(display("Request to {endpoint} failed: {source}"))]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected
    #[snafu(display("Could not decode response from {endpoint}: {source}"))]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The HTTP client could not be built (TLS backend, bad settings)
    #[snafu(display("Could not build HTTP client: {source}"))]
    HttpClient { source: reqwest::Error },

    /// The user selected an entity id that is not in the current list
    #[snafu(display("Unknown selection: {id}"))]
    NotFoundSelection { id: GeoId },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport { source, .. } | Error::Decode { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }

    /// Whether this error came from talking to the statistics API
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::Status { .. } | Error::Transport { .. } | Error::Decode { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = Error::Status {
            endpoint: "/regioes".to_string(),
            status: 503,
        };
        assert_eq!(err.status(), Some(503));
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), "HTTP 503 from /regioes");
    }

    #[test]
    fn test_selection_error_is_not_fetch() {
        let err = Error::NotFoundSelection { id: 99 };
        assert!(!err.is_fetch());
        assert_eq!(err.status(), None);
    }
}
