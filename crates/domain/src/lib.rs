mod error;
mod operation;
mod preview;
mod request;
mod theme;

pub use error::DomainError;
pub use operation::Operation;
pub use preview::{PreviewImage, ProcessedImage};
pub use request::{ProcessRequest, SourceImage};
pub use theme::Theme;
