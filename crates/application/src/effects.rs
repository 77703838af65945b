use std::path::PathBuf;

use restyle_domain::ProcessRequest;

/// Work the reducer wants done off the UI thread. The driver runs each
/// effect on a worker and feeds the completion back as a `FormEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadPreview { generation: u64, path: PathBuf },
    SendRequest { submission: u64, request: ProcessRequest },
}
