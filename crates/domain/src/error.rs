use std::fmt::{Display, Formatter};

use crate::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    MissingSourceImage(Operation),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSourceImage(operation) => {
                write!(f, "operation {} requires a source image", operation.key())
            }
        }
    }
}

impl std::error::Error for DomainError {}
