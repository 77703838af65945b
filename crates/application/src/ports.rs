use std::path::Path;

use restyle_domain::{PreviewImage, ProcessRequest, SourceImage};

use crate::ApplicationError;

/// One POST to the processing service, full binary body back.
pub trait ImageProcessor: Send + Sync {
    fn process(&self, request: &ProcessRequest) -> Result<Vec<u8>, ApplicationError>;
}

/// Turns files and response bodies into displayable previews.
pub trait PreviewDecoder: Send + Sync {
    fn load_from_path(
        &self,
        path: &Path,
    ) -> Result<(SourceImage, PreviewImage), ApplicationError>;

    fn decode_bytes(&self, bytes: &[u8]) -> Result<PreviewImage, ApplicationError>;
}
