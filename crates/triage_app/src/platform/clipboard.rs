use std::sync::mpsc;
use std::thread;

use thiserror::Error;
use triage_logging::triage_info;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("clipboard write failed: {0}")]
    Write(#[source] arboard::Error),
    #[error("clipboard worker has stopped")]
    WorkerGone,
}

/// Writes text to wherever the user pastes from.
pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard handle that can take text.
pub trait TextSink {
    fn set_text(&mut self, text: String) -> Result<(), arboard::Error>;
}

impl TextSink for arboard::Clipboard {
    fn set_text(&mut self, text: String) -> Result<(), arboard::Error> {
        arboard::Clipboard::set_text(self, text)
    }
}

struct CopyRequest {
    text: String,
    reply: mpsc::Sender<Result<(), ClipboardError>>,
}

/// The desktop clipboard.
///
/// One worker thread owns the handle for the life of the host. On X11 and
/// Wayland the copied text is served by that handle, so it must outlive the
/// copy. The handle is opened on first use and reopened after a failed open.
pub struct SystemClipboard {
    request_tx: mpsc::Sender<CopyRequest>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_opener(arboard::Clipboard::new)
    }

    pub fn with_opener<S, F>(open: F) -> Self
    where
        S: TextSink + 'static,
        F: Fn() -> Result<S, arboard::Error> + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<CopyRequest>();
        thread::spawn(move || {
            let mut handle: Option<S> = None;
            while let Ok(request) = request_rx.recv() {
                let result = write_text(&mut handle, &open, request.text);
                let _ = request.reply.send(result);
            }
        });
        Self { request_tx }
    }
}

fn write_text<S: TextSink>(
    handle: &mut Option<S>,
    open: &impl Fn() -> Result<S, arboard::Error>,
    text: String,
) -> Result<(), ClipboardError> {
    let sink = match handle.take() {
        Some(sink) => sink,
        None => {
            let sink = open().map_err(ClipboardError::Unavailable)?;
            triage_info!("clipboard handle opened");
            sink
        }
    };
    handle.insert(sink).set_text(text).map_err(ClipboardError::Write)
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (reply, reply_rx) = mpsc::channel();
        self.request_tx
            .send(CopyRequest {
                text: text.to_owned(),
                reply,
            })
            .map_err(|_| ClipboardError::WorkerGone)?;
        reply_rx.recv().map_err(|_| ClipboardError::WorkerGone)?
    }
}
