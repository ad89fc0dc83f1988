//! Triage core: the support-resource questionnaire as a pure state machine,
//! its static resource catalog and view-model helpers.
pub mod catalog;
mod effect;
mod error;
mod flow;
mod machine;
mod msg;
mod options;
pub mod questions;
mod state;
mod update;
mod view_model;

pub use catalog::{ResourceKey, ResourceRecord};
pub use effect::Effect;
pub use error::TriageError;
pub use flow::{FlowState, HistoryEntry, Selections, Step, QUESTION_COUNT};
pub use machine::TriageStateMachine;
pub use msg::{CopyOutcome, Msg, NavAction};
pub use options::{Answer, Concern, ContactMethod, LocalConcern, ResourceType};
pub use questions::{Question, QuestionOption};
pub use state::{AppState, CopyState};
pub use update::update;
pub use view_model::{
    progress_for, AppViewModel, CopyIndicator, FlowView, Progress, DEFAULT_COPY_REVERT_MS,
};
