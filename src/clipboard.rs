//! Clipboard access for copying generated passwords.
//!
//! A failed copy never propagates: callers get a [`CopyNotice`] that reads
//! "Failed to copy" and clears itself like the success message does.

use std::time::{Duration, Instant};
use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

pub const COPY_NOTICE_DURATION: Duration = Duration::from_millis(2000);
pub const COPY_SUCCESS_MESSAGE: &str = "Password copied!";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write error: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Transient status message shown after a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub success: bool,
    shown_at: Instant,
}

impl CopyNotice {
    pub fn new(success: bool, shown_at: Instant) -> Self {
        Self { success, shown_at }
    }

    pub fn message(&self) -> &'static str {
        if self.success {
            COPY_SUCCESS_MESSAGE
        } else {
            COPY_FAILURE_MESSAGE
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < COPY_NOTICE_DURATION
    }

    // Empty once the notice has expired
    pub fn text(&self, now: Instant) -> &'static str {
        if self.is_visible(now) {
            self.message()
        } else {
            ""
        }
    }
}

pub fn copy_to_clipboard(clipboard: &mut dyn Clipboard, text: &str) -> CopyNotice {
    match clipboard.write_text(text) {
        Ok(()) => {
            log::info!("Copied password to clipboard");
            CopyNotice::new(true, Instant::now())
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            CopyNotice::new(false, Instant::now())
        }
    }
}
