// SPDX-License-Identifier: MPL-2.0
//! Application-wide error type.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Content Error: {0}")]
    Content(String),

    #[error("Relay Error: {0}")]
    Relay(RelayError),
}

/// Failures reported by the mail relay.
///
/// The contact form only distinguishes success from failure; the variants
/// exist so the log carries a useful reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// No service, template, or public key configured.
    #[error("relay credentials are not configured")]
    NotConfigured,

    /// The request never reached the relay (DNS, TLS, timeout...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl From<RelayError> for Error {
    fn from(err: RelayError) -> Self {
        Error::Relay(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_toml_maps_to_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn relay_error_display_includes_status() {
        let err = Error::from(RelayError::Rejected {
            status: 400,
            body: "bad template".into(),
        });
        let text = format!("{}", err);
        assert!(text.contains("400"));
        assert!(text.contains("bad template"));
    }
}
