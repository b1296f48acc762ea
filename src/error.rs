use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// `--start` was not a `YYYY-MM-DD` date.
    InvalidDate(String),
    Config(String),
    Request(reqwest::Error),
    Json(serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "Invalid date format '{s}'. Use YYYY-MM-DD."),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Request(e) => write!(f, "Request error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
