// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Range bounds are not finite or `max <= min`.
    InvalidRange {
        min: f64,
        max: f64,
    },
    /// Step is zero, negative or not finite.
    InvalidStep(f64),
    /// Snapping was requested on a range without a step.
    MissingStep,
    /// A numeric property given as text could not be parsed.
    InvalidNumber(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidRange { min, max } => {
                write!(f, "Invalid range: min ({}) must be below max ({})", min, max)
            }
            Error::InvalidStep(step) => {
                write!(f, "Invalid step: {} (must be a finite number above zero)", step)
            }
            Error::MissingStep => write!(f, "Snapping requires a step"),
            Error::InvalidNumber(raw) => write!(f, "Invalid number: {:?}", raw),
        }
    }
}

impl std::error::Error for Error {}

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
    fn invalid_range_mentions_both_bounds() {
        let message = Error::InvalidRange { min: 5.0, max: 5.0 }.to_string();
        assert!(message.contains("min (5)"));
        assert!(message.contains("max (5)"));
    }

    #[test]
    fn invalid_number_quotes_raw_input() {
        let err = Error::InvalidNumber("ten".into());
        assert_eq!(err.to_string(), "Invalid number: \"ten\"");
    }
}
