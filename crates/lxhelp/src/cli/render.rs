//! # Rendering Module
//!
//! Turns pages and messages into terminal text. Functions here build `String`s;
//! `commands.rs` and `browse.rs` decide when to print them.
//!
//! ## Listing Layout
//!
//! ```text
//!   ▾  2. Permission denied
//!         You do not have the required permissions ...
//!         [Copy]
//!   ▸  3. cannot open shared object file
//! ```
//!
//! Each row is a marker (`▸`/`▾` for single-open pages, `[ ]`/`[x]` for the
//! checklist), a right-aligned number, and the title truncated to the terminal
//! width. Expanded rows are followed by their detail, indented under the title.

use colored::Colorize;
use lxhelpapp::api::{CmdMessage, MessageLevel, PageInfo};
use lxhelpapp::catalog::TIPS;
use lxhelpapp::disclosure::Disclosure;
use lxhelpapp::model::{AccordionItem, ChecklistItem, Entry, ErrorEntry, RecordId};
use lxhelpapp::page::{Page, Progress};
use std::time::Instant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Used when stdout is not a terminal.
pub const LINE_WIDTH: usize = 100;
const DETAIL_INDENT: &str = "        ";

/// How an entry kind is drawn in a listing.
pub trait Render: Entry {
    /// Checklist steps show their detail whether or not they are checked.
    const ALWAYS_DETAIL: bool = false;

    fn marker(open: bool) -> &'static str {
        if open {
            "▾"
        } else {
            "▸"
        }
    }

    fn detail(&self) -> Vec<String>;
}

impl Render for ErrorEntry {
    fn detail(&self) -> Vec<String> {
        let mut lines = vec![self.meaning.clone(), String::new()];
        lines.push("Common causes:".bold().to_string());
        lines.extend(self.causes.iter().map(|c| format!("  • {}", c)));
        lines.push(String::new());
        lines.push("Solution:".bold().to_string());
        lines.extend(self.solution.lines().map(str::to_string));
        if let Some(example) = &self.example {
            lines.push(String::new());
            lines.push("Example:".bold().to_string());
            lines.push(example.red().to_string());
        }
        lines
    }
}

impl Render for AccordionItem {
    fn detail(&self) -> Vec<String> {
        let mut lines = vec![self.summary.dimmed().to_string()];
        if !self.body.is_empty() {
            lines.push(self.body.clone());
        }
        if let Some(code) = &self.code {
            lines.push(String::new());
            lines.extend(code.lines().map(|l| l.cyan().to_string()));
        }
        lines
    }
}

impl Render for ChecklistItem {
    const ALWAYS_DETAIL: bool = true;

    fn marker(open: bool) -> &'static str {
        if open {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn detail(&self) -> Vec<String> {
        let mut lines = vec![self.description.clone()];
        lines.extend(self.commands.iter().map(|c| format!("  {}", c.cyan())));
        if !self.notes.is_empty() {
            lines.push(format!("{} {}", "Note:".yellow(), self.notes));
        }
        lines
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn render_pages(pages: &[PageInfo]) -> String {
    let name_width = pages.iter().map(|p| p.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for page in pages {
        let padding = " ".repeat(name_width - page.name.width());
        out.push_str(&format!(
            "  {}{}  {} {}\n",
            page.name.yellow(),
            padding,
            page.title.bold(),
            format!("({})", page.records).dimmed()
        ));
        out.push_str(&format!(
            "  {}  {}\n",
            " ".repeat(name_width),
            page.description.dimmed()
        ));
    }
    out
}

/// The filtered listing of `page`, with expanded records' detail.
pub fn render_page<T: Render, D: Disclosure>(
    title: &str,
    page: &Page<'_, T, D>,
    now: Instant,
    width: usize,
) -> String {
    let mut out = format!("{}\n\n", title.bold());
    for view in page.visible() {
        let marker = T::marker(view.open);
        let prefix = format!("  {} {:>2}. ", marker, view.number);
        let available = width.saturating_sub(prefix.width());
        let heading = truncate_to_width(view.entry.title(), available);
        let heading = if view.open {
            heading.bold()
        } else {
            heading.normal()
        };
        let prefix = if view.open {
            prefix.green()
        } else {
            prefix.normal()
        };
        out.push_str(&format!("{}{}\n", prefix, heading));

        if view.open || T::ALWAYS_DETAIL {
            for line in view.entry.detail() {
                out.push_str(&indent(&line));
            }
            if view.entry.copy_text().is_some() {
                out.push_str(&indent(&copy_label(page, view.id, now)));
            }
        }
    }
    out
}

pub fn render_progress(progress: Progress) -> String {
    let line = progress.to_string();
    if progress.total > 0 && progress.done == progress.total {
        format!("{}\n", line.green())
    } else {
        format!("{}\n", line.dimmed())
    }
}

pub fn render_tips() -> String {
    let mut out = format!("{}\n", "General Troubleshooting Tips".bold());
    for tip in &TIPS {
        out.push_str(&format!("  {} {}\n", format!("{}:", tip.title).yellow(), tip.body));
    }
    out
}

fn copy_label<T: Entry, D: Disclosure>(page: &Page<'_, T, D>, id: RecordId, now: Instant) -> String {
    if page.is_copied_at(id, now) {
        "[Copied!]".green().to_string()
    } else {
        "[Copy]".dimmed().to_string()
    }
}

fn indent(line: &str) -> String {
    if line.is_empty() {
        "\n".to_string()
    } else {
        format!("{}{}\n", DETAIL_INDENT, line)
    }
}

/// Current terminal width, or [`LINE_WIDTH`] when stdout is not a terminal.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| usize::from(cols))
        .unwrap_or(LINE_WIDTH)
}

/// Cuts `s` to at most `max_width` columns, ending in `…` when shortened.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use lxhelpapp::api::LxApi;
    use lxhelpapp::test_utils::MemoryClipboard;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        // wide characters count double
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_open_error_shows_detail_and_copy_button() {
        plain();
        let api = LxApi::new(MemoryClipboard::default());
        let page = api.error_page();
        let out = render_page("Errors", &page, Instant::now(), LINE_WIDTH);

        assert!(out.contains("  ▾  1. command not found\n"));
        assert!(out.contains("  ▸  2. Permission denied\n"));
        assert!(out.contains("Common causes:"));
        assert!(out.contains("[Copy]"));
        // only the first error is expanded
        assert_eq!(out.matches("Common causes:").count(), 1);
    }

    #[test]
    fn test_copied_record_shows_acknowledgment() {
        plain();
        let mut api = LxApi::new(MemoryClipboard::default());
        let mut page = api.error_page();
        let now = Instant::now();
        api.copy(&mut page, 1, now).unwrap();

        let out = render_page("Errors", &page, now, LINE_WIDTH);
        assert!(out.contains("[Copied!]"));
    }

    #[test]
    fn test_checklist_uses_checkboxes() {
        plain();
        let api = LxApi::new(MemoryClipboard::default());
        let mut page = api.checklist_page();
        api.toggle(&mut page, 2).unwrap();

        let out = render_page("Checklist", &page, Instant::now(), LINE_WIDTH);
        assert!(out.contains("  [ ]  1. Verify Package Installation\n"));
        assert!(out.contains("  [x]  2. Check Environment Variables\n"));
        assert_eq!(
            render_progress(page.progress()),
            "1 of 10 steps complete\n"
        );
    }

    #[test]
    fn test_messages_render_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::info("Found 1 error"), CmdMessage::warning("careful")]);
        assert_eq!(out, "Found 1 error\ncareful\n");
    }

    #[test]
    fn test_pages_listing_names_every_page() {
        plain();
        let api = LxApi::new(MemoryClipboard::default());
        let out = render_pages(&api.pages());
        for name in ["installation", "terminal", "errors", "troubleshooting"] {
            assert!(out.contains(name));
        }
    }
}
