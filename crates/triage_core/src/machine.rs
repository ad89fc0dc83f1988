//! The triage flow: step sequencing, undo history and resource resolution.

use triage_logging::{triage_debug, triage_error};

use crate::catalog::{self, ResourceKey, ResourceRecord};
use crate::questions::question;
use crate::view_model::{progress_for, FlowView, Progress};
use crate::{Answer, Concern, FlowState, ResourceType, Selections, Step, TriageError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriageStateMachine {
    state: FlowState,
}

impl TriageStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn selections(&self) -> &Selections {
        &self.state.selections
    }

    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    /// Parses `value` and applies it to the current step.
    pub fn select_option(&mut self, value: &str) -> Result<(), TriageError> {
        if self.state.current_step.is_results() {
            return Err(TriageError::FlowComplete);
        }
        self.select(value.parse()?)
    }

    /// Applies an answer to the current step.
    ///
    /// The pre-transition state is pushed onto the history before anything
    /// changes. An answer the current step does not offer is rejected and
    /// leaves the state untouched.
    pub fn select(&mut self, answer: Answer) -> Result<(), TriageError> {
        let step = self.state.current_step;
        let mut selections = self.state.selections;

        let next_step = match (step, answer) {
            (Step::Results, _) => return Err(TriageError::FlowComplete),
            (Step::One, Answer::ResourceType(ResourceType::National)) => {
                // National lines are not concern-specific.
                selections.resource_type = Some(ResourceType::National);
                selections.concern = Some(Concern::National);
                Step::Results
            }
            (Step::One, Answer::ResourceType(ResourceType::Local)) => {
                selections.resource_type = Some(ResourceType::Local);
                Step::Two
            }
            (Step::Two, Answer::Concern(concern)) => {
                selections.concern = Some(concern.into());
                Step::Three
            }
            (Step::Three, Answer::ContactMethod(method)) => {
                selections.contact_method = Some(method);
                Step::Results
            }
            (step, answer) => {
                return Err(TriageError::IllegalOption {
                    step,
                    value: answer.as_str().to_owned(),
                })
            }
        };

        let snapshot = self.state.snapshot();
        self.state.history.push(snapshot);
        self.state.current_step = next_step;
        self.state.selections = selections;
        triage_debug!("selected {} at {}, now at {}", answer, step, next_step);
        Ok(())
    }

    /// Undoes the most recent selection.
    ///
    /// Returns whether anything changed.
    pub fn go_back(&mut self) -> bool {
        if let Some(entry) = self.state.history.pop() {
            self.state.current_step = entry.step;
            self.state.selections = entry.selections;
            triage_debug!("back to {}", entry.step);
            return true;
        }
        if self.state.current_step.is_results() {
            // Results without a recorded selection: ask the last question again.
            self.state.current_step = Step::Three;
            return true;
        }
        false
    }

    pub fn restart(&mut self) {
        self.state = FlowState::new();
    }

    pub fn can_go_back(&self) -> bool {
        !self.state.history.is_empty() || self.state.current_step.is_results()
    }

    pub fn resolve_resource(&self) -> Result<&'static ResourceRecord, TriageError> {
        if !self.state.current_step.is_results() {
            return Err(TriageError::NotAtResults(self.state.current_step));
        }
        ResourceKey::from_selections(&self.state.selections)
            .map(catalog::lookup)
            .ok_or(TriageError::IncompleteSelections)
    }

    pub fn progress(&self) -> Progress {
        progress_for(self.state.current_step)
    }

    /// What the host should render for the current state.
    pub fn view(&self) -> FlowView {
        let can_go_back = self.can_go_back();
        match self.state.current_step {
            Step::Results => match self.resolve_resource() {
                Ok(resource) => FlowView::Results {
                    resource,
                    can_go_back,
                },
                Err(err) => {
                    triage_error!("results view without a resource: {}", err);
                    question_view(Step::Three, can_go_back)
                }
            },
            step => question_view(step, can_go_back),
        }
    }
}

fn question_view(step: Step, can_go_back: bool) -> FlowView {
    match (step.number(), question(step)) {
        (Some(step_number), Some(question)) => FlowView::Question {
            step_number,
            text: question.text,
            description: question.description,
            options: question.options,
            can_go_back,
        },
        _ => FlowView::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContactMethod;

    #[test]
    fn back_from_results_without_history_reasks_contact_method() {
        let mut machine = TriageStateMachine::new();
        machine.state.current_step = Step::Results;
        machine.state.selections = Selections {
            resource_type: Some(ResourceType::National),
            concern: Some(Concern::National),
            contact_method: Some(ContactMethod::Text),
        };

        assert!(machine.can_go_back());
        assert!(machine.go_back());
        assert_eq!(machine.current_step(), Step::Three);
        assert_eq!(
            machine.selections().contact_method,
            Some(ContactMethod::Text)
        );
    }

    #[test]
    fn back_at_first_step_is_a_noop() {
        let mut machine = TriageStateMachine::new();
        assert!(!machine.can_go_back());
        assert!(!machine.go_back());
        assert_eq!(machine, TriageStateMachine::new());
    }

    #[test]
    fn incomplete_results_render_the_last_question() {
        let mut machine = TriageStateMachine::new();
        machine.state.current_step = Step::Results;

        match machine.view() {
            FlowView::Question { step_number, .. } => assert_eq!(step_number, 3),
            other => panic!("unexpected view {other:?}"),
        }
    }
}
