use std::fmt::{self, Display, Formatter};

/// Why a single day's page could not be retrieved.
#[derive(Debug)]
pub enum Error {
    /// Transport failure, timeout, or an unreadable body.
    Request(reqwest::Error),
    /// The server answered with a non-2xx status.
    Status(u16),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "Request error: {e}"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}
