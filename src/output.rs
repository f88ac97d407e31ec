use arboard::Clipboard;
use tracing::debug;

use crate::error::{PclipError, Result};

/// Destination for the finished document.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The host clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            Clipboard::new().map_err(|err| PclipError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| PclipError::Clipboard(err.to_string()))?;
        debug!(bytes = text.len(), "clipboard updated");
        Ok(())
    }
}

/// Keeps everything written to it; stands in for the clipboard in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CaptureClipboard {
    pub(crate) writes: Vec<String>,
}

#[cfg(test)]
impl ClipboardSink for CaptureClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
