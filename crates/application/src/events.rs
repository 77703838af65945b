use std::path::PathBuf;

use restyle_domain::{Operation, PreviewImage, ProcessedImage, SourceImage, Theme};

use crate::ApplicationError;

/// Everything that can happen to the form: user input plus the
/// completion of a background effect. Completions carry the counter
/// they were spawned with so stale ones can be discarded.
#[derive(Debug, Clone)]
pub enum FormEvent {
    FileChosen(PathBuf),
    PreviewLoaded {
        generation: u64,
        result: Result<(SourceImage, PreviewImage), ApplicationError>,
    },
    PromptEdited(String),
    ThemePicked(Theme),
    OperationPicked(Operation),
    SubmitPressed,
    ResponseArrived {
        submission: u64,
        result: Result<ProcessedImage, ApplicationError>,
    },
}
