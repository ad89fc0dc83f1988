use std::fmt;

use crate::{Concern, ContactMethod, ResourceType};

/// Number of questions in the flow.
pub const QUESTION_COUNT: u8 = 3;

/// Position in the flow. Declaration order is the forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    One,
    Two,
    Three,
    Results,
}

impl Step {
    /// The question number for this step, `None` at results.
    pub fn number(self) -> Option<u8> {
        match self {
            Step::One => Some(1),
            Step::Two => Some(2),
            Step::Three => Some(3),
            Step::Results => None,
        }
    }

    pub fn is_results(self) -> bool {
        self == Step::Results
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(number) => write!(f, "step {number}"),
            None => f.write_str("results"),
        }
    }
}

/// Answers collected so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selections {
    pub resource_type: Option<ResourceType>,
    pub concern: Option<Concern>,
    pub contact_method: Option<ContactMethod>,
}

/// Snapshot taken immediately before a selection is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub step: Step,
    pub selections: Selections,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowState {
    pub current_step: Step,
    pub selections: Selections,
    pub history: Vec<HistoryEntry>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            step: self.current_step,
            selections: self.selections,
        }
    }
}
