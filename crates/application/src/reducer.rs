use restyle_domain::ProcessRequest;

use crate::{submit_allowed, Effect, FormEvent, FormState};

/// Pure transition function: applies one event to the state and
/// returns the follow-up effects. Completions carrying a counter that
/// no longer matches the state are dropped on the floor.
pub fn reduce(state: FormState, event: FormEvent) -> (FormState, Vec<Effect>) {
    let mut next = state;
    let mut effects = Vec::new();

    match event {
        FormEvent::FileChosen(path) => {
            next.preview_generation += 1;
            effects.push(Effect::LoadPreview {
                generation: next.preview_generation,
                path,
            });
        }
        FormEvent::PreviewLoaded { generation, result } => {
            if generation != next.preview_generation {
                log::debug!("dropping preview for superseded selection {generation}");
                return (next, effects);
            }
            match result {
                Ok((source, preview)) => {
                    next.selected_image = Some(source);
                    next.image_preview = Some(preview);
                }
                Err(error) => {
                    next.error_message = Some(error.to_string());
                }
            }
        }
        FormEvent::PromptEdited(prompt) => {
            next.prompt = prompt;
        }
        FormEvent::ThemePicked(theme) => {
            next.theme = theme;
        }
        FormEvent::OperationPicked(operation) => {
            next.operation = operation;
        }
        FormEvent::SubmitPressed => {
            if !submit_allowed(&next) {
                return (next, effects);
            }
            next.error_message = None;
            next.in_flight = true;
            next.submission += 1;
            effects.push(Effect::SendRequest {
                submission: next.submission,
                request: ProcessRequest {
                    prompt: next.prompt.clone(),
                    theme: next.theme,
                    operation: next.operation,
                    source: next.selected_image.clone(),
                },
            });
        }
        FormEvent::ResponseArrived { submission, result } => {
            if submission != next.submission {
                log::debug!("dropping response for superseded submission {submission}");
                return (next, effects);
            }
            next.in_flight = false;
            match result {
                Ok(processed) => {
                    next.processed_image = Some(processed);
                }
                Err(error) => {
                    next.error_message = Some(error.to_string());
                }
            }
        }
    }

    (next, effects)
}
