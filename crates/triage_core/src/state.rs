use std::time::Duration;

use crate::view_model::{AppViewModel, CopyIndicator, FlowView, DEFAULT_COPY_REVERT_MS};
use crate::TriageStateMachine;

/// Copy button state. `attempt` identifies the newest copy so that late
/// results and revert timers from earlier attempts can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyState {
    pub indicator: CopyIndicator,
    pub attempt: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    machine: TriageStateMachine,
    modal_open: bool,
    copy: CopyState,
    copy_revert_delay: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            machine: TriageStateMachine::new(),
            modal_open: false,
            copy: CopyState::default(),
            copy_revert_delay: Duration::from_millis(DEFAULT_COPY_REVERT_MS),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy_revert_delay(mut self, delay: Duration) -> Self {
        self.copy_revert_delay = delay;
        self
    }

    pub fn machine(&self) -> &TriageStateMachine {
        &self.machine
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy
    }

    pub fn view(&self) -> AppViewModel {
        let flow = if self.modal_open {
            self.machine.view()
        } else {
            FlowView::Closed
        };
        AppViewModel {
            modal_open: self.modal_open,
            flow,
            progress: self.machine.progress(),
            copy: self.copy.indicator,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn machine_mut(&mut self) -> &mut TriageStateMachine {
        &mut self.machine
    }

    pub(crate) fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    pub(crate) fn copy_revert_delay(&self) -> Duration {
        self.copy_revert_delay
    }

    /// Starts a new copy attempt, superseding any earlier one.
    pub(crate) fn begin_copy(&mut self) -> u64 {
        self.copy.attempt += 1;
        self.copy.indicator = CopyIndicator::Copying;
        self.copy.attempt
    }

    pub(crate) fn set_copy_indicator(&mut self, indicator: CopyIndicator) {
        self.copy.indicator = indicator;
    }

    /// Drops any in-flight copy so its results are ignored.
    pub(crate) fn cancel_copy(&mut self) {
        self.copy.attempt += 1;
        self.copy.indicator = CopyIndicator::Idle;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
