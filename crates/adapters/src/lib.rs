pub mod http;
pub mod preview;

pub use http::HttpImageProcessor;
pub use preview::ImageCratePreviewDecoder;
