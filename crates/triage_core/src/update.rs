use triage_logging::{triage_debug, triage_error, triage_info, triage_warn};

use crate::questions::question;
use crate::view_model::CopyIndicator;
use crate::{AppState, CopyOutcome, Effect, Msg, NavAction, Step};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModalOpened => {
            state.machine_mut().restart();
            state.set_modal_open(true);
            state.cancel_copy();
            state.mark_dirty();
            triage_info!("triage dialog opened");
            announce_first_question(None)
        }
        Msg::ModalClosed => {
            // Reset now so a reopened dialog never shows stale answers.
            state.machine_mut().restart();
            state.set_modal_open(false);
            state.cancel_copy();
            triage_info!("triage dialog closed");
            Vec::new()
        }
        Msg::OptionSelected(value) => {
            if !state.is_modal_open() {
                triage_warn!("ignoring selection {:?} while the dialog is closed", value);
                return (state, Vec::new());
            }
            match state.machine_mut().select_option(&value) {
                Ok(()) => {
                    state.cancel_copy();
                    state.mark_dirty();
                }
                Err(err) => {
                    // The host rendered options that do not match the flow.
                    triage_error!("rejected selection {:?}: {}", value, err);
                }
            }
            Vec::new()
        }
        Msg::Navigate(action) => {
            if !state.is_modal_open() {
                triage_warn!("ignoring {:?} while the dialog is closed", action);
                return (state, Vec::new());
            }
            match action {
                NavAction::Back => {
                    if state.machine_mut().go_back() {
                        state.cancel_copy();
                        state.mark_dirty();
                    }
                    Vec::new()
                }
                NavAction::Restart => {
                    state.machine_mut().restart();
                    state.cancel_copy();
                    state.mark_dirty();
                    announce_first_question(Some("Starting over."))
                }
            }
        }
        Msg::CopyRequested(text) => {
            if !state.is_modal_open() {
                triage_warn!("ignoring copy request while the dialog is closed");
                return (state, Vec::new());
            }
            let number = match state.machine().resolve_resource() {
                Ok(resource) => resource.number,
                Err(err) => {
                    triage_warn!("ignoring copy request {:?}: {}", text, err);
                    return (state, Vec::new());
                }
            };
            if text != number {
                triage_warn!("copy request {:?} does not match resolved {:?}", text, number);
            }
            let attempt = state.begin_copy();
            state.mark_dirty();
            triage_debug!("copy attempt {} for {:?}", attempt, number);
            vec![Effect::CopyText {
                attempt,
                text: number.to_string(),
            }]
        }
        Msg::CopyFinished {
            attempt,
            text,
            outcome,
        } => {
            if attempt != state.copy_state().attempt {
                triage_debug!("dropping result of superseded copy attempt {}", attempt);
                return (state, Vec::new());
            }
            let announcement = match outcome {
                CopyOutcome::Success => {
                    state.set_copy_indicator(CopyIndicator::Copied);
                    format!("Copied {text} to clipboard")
                }
                CopyOutcome::Failure => {
                    triage_warn!("failed to copy {:?} to the clipboard", text);
                    state.set_copy_indicator(CopyIndicator::Failed);
                    format!("Failed to copy {text}")
                }
            };
            state.mark_dirty();
            vec![
                Effect::Announce(announcement),
                Effect::ScheduleCopyRevert {
                    attempt,
                    after: state.copy_revert_delay(),
                },
            ]
        }
        Msg::CopyRevertElapsed { attempt } => {
            let copy = state.copy_state();
            let showing_outcome = matches!(
                copy.indicator,
                CopyIndicator::Copied | CopyIndicator::Failed
            );
            if attempt == copy.attempt && showing_outcome {
                state.set_copy_indicator(CopyIndicator::Idle);
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn announce_first_question(prefix: Option<&str>) -> Vec<Effect> {
    let Some(first) = question(Step::One) else {
        return Vec::new();
    };
    let message = match prefix {
        Some(prefix) => format!("{prefix} {}", first.text),
        None => first.text.to_string(),
    };
    vec![Effect::Announce(message)]
}
