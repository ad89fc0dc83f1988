use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use triage_core::{CopyOutcome, Effect, Msg};
use triage_logging::{triage_debug, triage_warn};

use super::announcer::Announcer;
use super::app::HostEvent;
use super::clipboard::Clipboard;

/// Executes core effects. Clipboard writes and revert timers run on worker
/// threads and report back through the host event channel, so input handling
/// never waits on them.
pub struct EffectRunner {
    event_tx: mpsc::Sender<HostEvent>,
    clipboard: Arc<dyn Clipboard>,
    announcer: Arc<dyn Announcer>,
}

impl EffectRunner {
    pub fn new(
        event_tx: mpsc::Sender<HostEvent>,
        clipboard: Arc<dyn Clipboard>,
        announcer: Arc<dyn Announcer>,
    ) -> Self {
        Self {
            event_tx,
            clipboard,
            announcer,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Announce(message) => self.announcer.announce(&message),
                Effect::CopyText { attempt, text } => self.spawn_copy(attempt, text),
                Effect::ScheduleCopyRevert { attempt, after } => {
                    let event_tx = self.event_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        // The host may have quit in the meantime.
                        let _ = event_tx.send(HostEvent::Core(Msg::CopyRevertElapsed { attempt }));
                    });
                }
            }
        }
    }

    fn spawn_copy(&self, attempt: u64, text: String) {
        let clipboard = self.clipboard.clone();
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            let outcome = match clipboard.copy_text(&text) {
                Ok(()) => {
                    triage_debug!("copy attempt {} succeeded", attempt);
                    CopyOutcome::Success
                }
                Err(err) => {
                    triage_warn!("copy attempt {} failed: {}", attempt, err);
                    CopyOutcome::Failure
                }
            };
            let _ = event_tx.send(HostEvent::Core(Msg::CopyFinished {
                attempt,
                text,
                outcome,
            }));
        });
    }
}
