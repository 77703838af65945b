use crate::{DomainError, Operation, Theme};

/// The user-selected file, kept in memory for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One submission to the processing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub prompt: String,
    pub theme: Theme,
    pub operation: Operation,
    pub source: Option<SourceImage>,
}

impl ProcessRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.operation.requires_source_image() && self.source.is_none() {
            return Err(DomainError::MissingSourceImage(self.operation));
        }
        Ok(())
    }
}
