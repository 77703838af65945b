mod effects;
mod error;
mod events;
mod form;
mod ports;
mod reducer;

pub use effects::Effect;
pub use error::{ApplicationError, GENERIC_FAILURE_MESSAGE};
pub use events::FormEvent;
pub use form::{submit_allowed, FormState};
pub use ports::{ImageProcessor, PreviewDecoder};
pub use reducer::reduce;
