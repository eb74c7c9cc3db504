//! Helpers shared by unit tests and, behind the `test_utils` feature, by
//! downstream crates.

use crate::clipboard::Clipboard;
use crate::error::{LxError, Result};
use crate::model::{ChecklistItem, ErrorEntry};
use crate::store::RecordStore;

/// Records the last text written instead of touching the host clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Always refuses, like a browser in an insecure context.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(LxError::Clipboard("clipboard access denied".to_string()))
    }
}

/// An error entry with only its title filled in.
pub fn error_entry(title: &str) -> ErrorEntry {
    ErrorEntry {
        error: title.to_string(),
        meaning: String::new(),
        causes: Vec::new(),
        solution: String::new(),
        example: None,
    }
}

/// "command not found", "Permission denied", "disk quota exceeded".
pub fn three_errors() -> RecordStore<ErrorEntry> {
    RecordStore::new(vec![
        ErrorEntry {
            solution: "echo $PATH".to_string(),
            ..error_entry("command not found")
        },
        ErrorEntry {
            solution: "chmod +x script.sh".to_string(),
            ..error_entry("Permission denied")
        },
        ErrorEntry {
            solution: "df -h".to_string(),
            ..error_entry("disk quota exceeded")
        },
    ])
    .expect("fixture titles are not blank")
}

/// Six checklist steps titled "Step 0" to "Step 5".
pub fn six_steps() -> RecordStore<ChecklistItem> {
    let items = (0..6)
        .map(|n| ChecklistItem {
            title: format!("Step {n}"),
            description: String::new(),
            commands: vec![format!("echo {n}")],
            notes: String::new(),
        })
        .collect();
    RecordStore::new(items).expect("fixture titles are not blank")
}
