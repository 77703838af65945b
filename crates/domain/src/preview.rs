/// A decoded, displayable encoding (RGBA8) of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.rgba.is_empty()
    }
}

/// The raw response body returned by the processing service, plus its
/// decoded preview. The raw bytes are kept so the result can be saved
/// to disk as delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub bytes: Vec<u8>,
    pub preview: PreviewImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preview_is_reported_empty() {
        let preview = PreviewImage {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        };
        assert!(preview.is_empty());

        let preview = PreviewImage {
            width: 2,
            height: 1,
            rgba: vec![0; 8],
        };
        assert!(!preview.is_empty());
    }
}
