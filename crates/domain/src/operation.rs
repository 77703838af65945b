use serde::{Deserialize, Serialize};

/// Requested transformation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    Generate,
    Upscale,
    Modify,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Generate, Operation::Upscale, Operation::Modify];

    /// Stable key used in the upload form.
    pub fn key(self) -> &'static str {
        match self {
            Operation::Generate => "generate",
            Operation::Upscale => "upscale",
            Operation::Modify => "modify",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Generate => "Generate New Image",
            Operation::Upscale => "Upscale Image",
            Operation::Modify => "Modify Image",
        }
    }

    /// Generate works from the prompt alone; the other modes transform an upload.
    pub fn requires_source_image(self) -> bool {
        !matches!(self, Operation::Generate)
    }
}
