use std::fmt::{Display, Formatter};

use restyle_domain::DomainError;

/// Shown when a transport failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing the image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    Domain(DomainError),
    HttpStatus(u16),
    Network(String),
    Io(String),
    Decode(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::HttpStatus(status) => write!(f, "HTTP error! status: {status}"),
            Self::Network(message) => {
                if message.is_empty() {
                    write!(f, "{GENERIC_FAILURE_MESSAGE}")
                } else {
                    write!(f, "{message}")
                }
            }
            Self::Io(message) => write!(f, "io error: {message}"),
            Self::Decode(message) => write!(f, "decode error: {message}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
