use thiserror::Error;

use crate::Step;

/// Caller contract violations reported by the triage state machine.
///
/// These indicate that the host rendered stale options or asked for a result
/// too early. The machine state is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("unknown option value {0:?}")]
    UnknownOption(String),
    #[error("option {value:?} is not offered at {step}")]
    IllegalOption { step: Step, value: String },
    #[error("the flow is complete; go back or restart before selecting again")]
    FlowComplete,
    #[error("no resource is available before the flow reaches results (currently at {0})")]
    NotAtResults(Step),
    #[error("selections are incomplete for resource lookup")]
    IncompleteSelections,
}
