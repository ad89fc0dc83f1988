#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The dialog was shown.
    ModalOpened,
    /// The dialog was dismissed.
    ModalClosed,
    /// User picked an option on the current question.
    OptionSelected(String),
    /// User clicked Back or Start Over.
    Navigate(NavAction),
    /// User asked to copy the resolved contact number. Only honored at results,
    /// and the number copied is always the resolved one.
    CopyRequested(String),
    /// Clipboard write finished.
    CopyFinished {
        attempt: u64,
        text: String,
        outcome: CopyOutcome,
    },
    /// Copy indicator revert delay elapsed.
    CopyRevertElapsed { attempt: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Success,
    Failure,
}
