//! Clipboard sinks for generated trees
//!
//! Copying is a best-effort side channel: a failure is reported to the
//! caller but never changes the generated text.

use crate::error::{MapError, MapResult};

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> MapResult<()>;
}

/// The system clipboard, via arboard.
///
/// The arboard handle is created lazily and kept for the lifetime of the
/// sink; on X11 the clipboard owner must stay alive to answer paste requests.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> MapResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new().map_err(|e| {
                tracing::debug!("arboard clipboard init failed: {}", e);
                MapError::ClipboardUnavailable(e.to_string())
            })?;
            self.inner = Some(cb);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| MapError::ClipboardUnavailable("no clipboard handle".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> MapResult<()> {
        let result = self.handle()?.set_text(text.to_string());
        match result {
            Ok(()) => {
                tracing::debug!("copied {} bytes to clipboard", text.len());
                Ok(())
            }
            Err(e) => {
                tracing::debug!("arboard copy failed: {}", e);
                // A stale handle can't be reused; recreate on the next attempt.
                self.inner = None;
                Err(MapError::ClipboardUnavailable(e.to_string()))
            }
        }
    }
}

/// In-memory sink, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write fails with this message.
    pub fail_with: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> MapResult<()> {
        if let Some(msg) = &self.fail_with {
            return Err(MapError::ClipboardUnavailable(msg.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
