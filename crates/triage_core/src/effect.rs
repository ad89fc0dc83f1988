use std::time::Duration;

/// Work the host performs on behalf of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Notify assistive technology. Fire and forget.
    Announce(String),
    /// Write `text` to the clipboard and report back with `Msg::CopyFinished`.
    CopyText { attempt: u64, text: String },
    /// Post `Msg::CopyRevertElapsed` once `after` has passed.
    ScheduleCopyRevert { attempt: u64, after: Duration },
}
