//! # Clipboard Export
//!
//! Copy buttons write a literal text block to the clipboard and then show
//! "Copied!" for a short while. This module has three pieces:
//!
//! - [`Clipboard`]: where text goes. [`SystemClipboard`] shells out to the
//!   platform tool (`pbcopy`, `wl-copy`/`xclip`/`xsel`, `clip`), or to a
//!   configured command.
//! - [`TransientFlag`]: a boolean with a pending reset. Raising it again
//!   replaces the pending reset, cancelling it drops the reset for good.
//! - [`CodeBlock`]: text plus its own flag, as owned by a page.
//!
//! Nothing here spawns timers. The owner polls with the current [`Instant`] and
//! the flag applies its reset once the deadline has passed.
//!
//! Copy failures are returned as [`LxError::Clipboard`] and leave the flag down.

use crate::error::{LxError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How long "Copied!" stays up.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub trait Clipboard {
    /// Writes `text` verbatim.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}

/// The host clipboard, reached through an external command.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `argv` instead of the platform tool. The text is written to its stdin.
    pub fn with_command(argv: Vec<String>) -> Self {
        Self {
            command: (!argv.is_empty()).then_some(argv),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match &self.command {
            Some(argv) => {
                let args: Vec<&str> = argv[1..].iter().map(String::as_str).collect();
                pipe_to(&argv[0], &args, text)
            }
            None => copy_to_clipboard(text),
        }
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy on Wayland, otherwise xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(LxError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        if let Ok(()) = pipe_to("wl-copy", &[], text) {
            return Ok(());
        }
    }

    // Try xclip first, then xsel
    match pipe_to("xclip", &["-selection", "clipboard"], text) {
        Ok(()) => Ok(()),
        Err(_) => pipe_to("xsel", &["--clipboard", "--input"], text)
            .map_err(|e| LxError::Clipboard(format!("{}. Install xclip or xsel.", e))),
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| LxError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    // stdin is closed before the wait, and the child is reaped even if the write failed.
    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));

    let status = child
        .wait()
        .map_err(|e| LxError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    written.map_err(|e| LxError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(LxError::Clipboard(format!("{} exited with error", program)))
    }
}

/// A boolean that falls back to `false` a fixed time after it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientFlag {
    raised: bool,
    reset_at: Option<Instant>,
    window: Duration,
}

impl TransientFlag {
    pub fn new(window: Duration) -> Self {
        Self {
            raised: false,
            reset_at: None,
            window,
        }
    }

    /// Raises the flag and schedules its reset `window` after `now`,
    /// replacing any reset still pending.
    pub fn raise(&mut self, now: Instant) {
        self.raised = true;
        self.reset_at = Some(now + self.window);
    }

    /// Applies the pending reset if its deadline has passed.
    ///
    /// Returns `true` only on the poll that lowers the flag.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.reset_at = None;
                let was_raised = self.raised;
                self.raised = false;
                was_raised
            }
            _ => false,
        }
    }

    /// Drops the pending reset. The flag keeps its current value forever after.
    ///
    /// Returns whether a reset was pending.
    pub fn cancel(&mut self) -> bool {
        self.reset_at.take().is_some()
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// What a poll at `now` would leave the flag at.
    pub fn is_raised_at(&self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => false,
            _ => self.raised,
        }
    }

    pub fn pending_reset(&self) -> Option<Instant> {
        self.reset_at
    }
}

impl Default for TransientFlag {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

/// A copyable block of text with its own "copied" acknowledgment.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    text: String,
    copied: TransientFlag,
}

impl CodeBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_feedback(text, COPY_FEEDBACK)
    }

    pub fn with_feedback(text: impl Into<String>, window: Duration) -> Self {
        Self {
            text: text.into(),
            copied: TransientFlag::new(window),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the block to `clipboard` and raises the copied flag.
    ///
    /// On failure the flag is left as it was.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, now: Instant) -> Result<()> {
        clipboard.write_text(&self.text)?;
        self.copied.raise(now);
        tracing::debug!(bytes = self.text.len(), "copied code block");
        Ok(())
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        self.copied.poll(now)
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_raised()
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied.is_raised_at(now)
    }

    /// Button label as the page shows it.
    pub fn label_at(&self, now: Instant) -> &'static str {
        if self.is_copied_at(now) {
            "Copied!"
        } else {
            "Copy"
        }
    }

    /// Ends the block's life, cancelling any pending reset.
    pub fn teardown(mut self) -> bool {
        self.copied.cancel()
    }
}
