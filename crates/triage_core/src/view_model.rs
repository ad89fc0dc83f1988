use serde::Serialize;

use crate::catalog::ResourceRecord;
use crate::questions::QuestionOption;
use crate::{Step, QUESTION_COUNT};

/// How long the copy indicator shows its outcome before reverting.
pub const DEFAULT_COPY_REVERT_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppViewModel {
    pub modal_open: bool,
    pub flow: FlowView,
    pub progress: Progress,
    pub copy: CopyIndicator,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowView {
    Question {
        step_number: u8,
        text: &'static str,
        description: &'static str,
        options: &'static [QuestionOption],
        can_go_back: bool,
    },
    Results {
        resource: &'static ResourceRecord,
        can_go_back: bool,
    },
    Closed,
}

impl FlowView {
    pub fn can_go_back(&self) -> bool {
        match self {
            FlowView::Question { can_go_back, .. } | FlowView::Results { can_go_back, .. } => {
                *can_go_back
            }
            FlowView::Closed => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// Step number, or "Complete" at results.
    pub label: String,
    pub total_steps: u8,
    /// Always within 0..=100.
    pub percent: f64,
}

/// Progress is a pure function of the step.
pub fn progress_for(step: Step) -> Progress {
    match step.number() {
        Some(number) => Progress {
            label: number.to_string(),
            total_steps: QUESTION_COUNT,
            percent: f64::from(number) / f64::from(QUESTION_COUNT) * 100.0,
        },
        None => Progress {
            label: "Complete".to_string(),
            total_steps: QUESTION_COUNT,
            percent: 100.0,
        },
    }
}

/// State of the copy button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyIndicator {
    #[default]
    Idle,
    Copying,
    Copied,
    Failed,
}

impl CopyIndicator {
    pub fn label(self) -> &'static str {
        match self {
            CopyIndicator::Idle => "Copy",
            CopyIndicator::Copying => "Copying...",
            CopyIndicator::Copied => "Copied!",
            CopyIndicator::Failed => "Failed",
        }
    }
}
