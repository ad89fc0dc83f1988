use triage_logging::triage_info;

/// Assistive-technology notifications. Fire and forget.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &str);
}

/// Prints announcements to stderr, out of the way of the rendered dialog.
pub struct TerminalAnnouncer {
    enabled: bool,
}

impl TerminalAnnouncer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Announcer for TerminalAnnouncer {
    fn announce(&self, message: &str) {
        triage_info!("announce: {}", message);
        if self.enabled {
            eprintln!("[announce] {message}");
        }
    }
}
