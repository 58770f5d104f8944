// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A handle, element id or item id has no registered counterpart.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller broke an operation contract (zero step, hidden item).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Image Error: {0}")]
    Image(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
