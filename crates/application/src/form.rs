use restyle_domain::{Operation, PreviewImage, ProcessedImage, SourceImage, Theme};

/// The whole UI state of the form. Mutated only by the reducer; the
/// generation counters let it recognize completions that belong to a
/// superseded selection or submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub selected_image: Option<SourceImage>,
    pub image_preview: Option<PreviewImage>,
    pub processed_image: Option<ProcessedImage>,
    pub prompt: String,
    pub theme: Theme,
    pub operation: Operation,
    pub in_flight: bool,
    pub error_message: Option<String>,
    pub preview_generation: u64,
    pub submission: u64,
}

/// Submit gate: one request at a time, and every mode except generate
/// needs a selected image.
pub fn submit_allowed(state: &FormState) -> bool {
    if state.in_flight {
        return false;
    }
    !state.operation.requires_source_image() || state.selected_image.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source() -> SourceImage {
        SourceImage {
            file_name: "photo.jpg".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn fresh_state_starts_on_generate_with_default_theme() {
        let state = FormState::default();
        assert_eq!(state.theme, Theme::Default);
        assert_eq!(state.operation, Operation::Generate);
        assert!(state.selected_image.is_none());
        assert!(state.image_preview.is_none());
        assert!(state.processed_image.is_none());
        assert!(!state.in_flight);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn generate_submits_without_a_selection() {
        let state = FormState::default();
        assert!(submit_allowed(&state));
    }

    #[test]
    fn upscale_and_modify_need_a_selection() {
        let mut state = FormState {
            operation: Operation::Upscale,
            ..FormState::default()
        };
        assert!(!submit_allowed(&state));

        state.operation = Operation::Modify;
        assert!(!submit_allowed(&state));

        state.selected_image = Some(sample_source());
        assert!(submit_allowed(&state));
    }

    #[test]
    fn nothing_submits_while_a_request_is_in_flight() {
        let state = FormState {
            in_flight: true,
            ..FormState::default()
        };
        assert!(!submit_allowed(&state));
    }
}
