//! Line-driven browse session.
//!
//! One page stays alive for the whole session. Each input line is one command:
//!
//! | Input | Effect |
//! |-------|--------|
//! | `/text`, `search text` | set the query (collapses single-open pages) |
//! | `clear` | empty the query |
//! | `open N`, `check N` | toggle record N |
//! | `copy N` | copy record N's code block |
//! | `show`, empty line | redraw |
//! | `help` | list commands |
//! | `quit`, `q`, `exit`, EOF | end the session |
//!
//! Due "Copied!" resets are applied before every command. Ending the session
//! tears the page down, cancelling resets still pending.

use super::render::{self, Render};
use anyhow::Result;
use lxhelpapp::api::{CmdMessage, CmdResult, LxApi};
use lxhelpapp::clipboard::Clipboard;
use lxhelpapp::disclosure::Disclosure;
use lxhelpapp::page::{Page, Progress};
use std::io::{BufRead, Write};
use std::time::Instant;

const HELP: &str = "Commands: /text | search text | clear | open N | check N | copy N | show | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Search(String),
    Clear,
    Toggle(usize),
    Copy(usize),
    Show,
    Help,
    Quit,
}

fn parse_action(line: &str) -> std::result::Result<Action, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(query) = line.strip_prefix('/') {
        return Ok(Action::Search(query.to_string()));
    }
    let trimmed = line.trim();
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((trimmed, ""));
    let number = |rest: &str| {
        rest.parse::<usize>()
            .map_err(|_| format!("Expected a record number, got '{}'", rest))
    };
    match word.to_ascii_lowercase().as_str() {
        "" | "show" => Ok(Action::Show),
        "search" => Ok(Action::Search(rest.to_string())),
        "clear" => Ok(Action::Clear),
        "open" | "check" | "toggle" => number(rest).map(Action::Toggle),
        "copy" => number(rest).map(Action::Copy),
        "help" | "?" => Ok(Action::Help),
        "quit" | "q" | "exit" => Ok(Action::Quit),
        other => Err(format!("Unknown command '{}'. {}", other, HELP)),
    }
}

pub struct Session<'a> {
    pub title: &'a str,
    pub width: usize,
    /// Print a `> ` prompt before reading each line.
    pub prompt: bool,
}

impl Session<'_> {
    /// Runs until `quit` or end of input. `footer` adds a per-page status line.
    pub fn run<'s, T, D, C, R, W, F>(
        &self,
        api: &mut LxApi<C>,
        mut page: Page<'s, T, D>,
        input: &mut R,
        out: &mut W,
        footer: F,
    ) -> Result<()>
    where
        T: Render,
        D: Disclosure,
        C: Clipboard,
        R: BufRead,
        W: Write,
        F: Fn(&Page<'s, T, D>) -> Option<Progress>,
    {
        self.draw(out, &page, &footer, &CmdResult::default())?;
        let mut line = String::new();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let now = Instant::now();
            for id in page.poll(now) {
                tracing::debug!(%id, "copy acknowledgment cleared");
            }

            let result = match parse_action(&line) {
                Ok(Action::Quit) => break,
                Ok(action) => apply(api, &mut page, action, now),
                Err(message) => CmdResult::default().with_message(CmdMessage::warning(message)),
            };
            self.draw(out, &page, &footer, &result)?;
        }

        let cancelled = page.teardown();
        tracing::debug!(cancelled, "browse session ended");
        Ok(())
    }

    fn draw<'s, T, D, W, F>(
        &self,
        out: &mut W,
        page: &Page<'s, T, D>,
        footer: &F,
        result: &CmdResult,
    ) -> Result<()>
    where
        T: Render,
        D: Disclosure,
        W: Write,
        F: Fn(&Page<'s, T, D>) -> Option<Progress>,
    {
        write!(
            out,
            "{}",
            render::render_page(self.title, page, Instant::now(), self.width)
        )?;
        if let Some(progress) = footer(page) {
            write!(out, "\n{}", render::render_progress(progress))?;
        }
        if !result.messages.is_empty() {
            write!(out, "\n{}", render::render_messages(&result.messages))?;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn apply<T: Render, D: Disclosure, C: Clipboard>(
    api: &mut LxApi<C>,
    page: &mut Page<'_, T, D>,
    action: Action,
    now: Instant,
) -> CmdResult {
    let outcome = match action {
        Action::Search(query) => Ok(api.search(page, &query)),
        Action::Clear => {
            page.clear_query();
            Ok(CmdResult::default())
        }
        Action::Toggle(number) => api.toggle(page, number),
        Action::Copy(number) => api.copy(page, number, now),
        Action::Help => Ok(CmdResult::default().with_message(CmdMessage::info(HELP))),
        Action::Show | Action::Quit => Ok(CmdResult::default()),
    };
    // Bad numbers and empty sections are reported, the session goes on.
    outcome.unwrap_or_else(|e| CmdResult::default().with_message(CmdMessage::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lxhelpapp::test_utils::{FailingClipboard, MemoryClipboard};
    use std::io::Cursor;

    fn session() -> Session<'static> {
        Session {
            title: "Test",
            width: 100,
            prompt: false,
        }
    }

    fn browse_errors<C: Clipboard>(api: &mut LxApi<C>, script: &str) -> String {
        colored::control::set_override(false);
        let page = api.error_page();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        session()
            .run(api, page, &mut input, &mut out, |_| None)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parses_commands() {
        assert_eq!(parse_action("/perm\n"), Ok(Action::Search("perm".into())));
        assert_eq!(parse_action("/ perm"), Ok(Action::Search(" perm".into())));
        assert_eq!(
            parse_action("search disk quota"),
            Ok(Action::Search("disk quota".into()))
        );
        assert_eq!(parse_action("open 3"), Ok(Action::Toggle(3)));
        assert_eq!(parse_action("check 2"), Ok(Action::Toggle(2)));
        assert_eq!(parse_action("copy 1"), Ok(Action::Copy(1)));
        assert_eq!(parse_action("\n"), Ok(Action::Show));
        assert_eq!(parse_action("QUIT"), Ok(Action::Quit));
        assert!(parse_action("open two").is_err());
        assert!(parse_action("frobnicate").is_err());
    }

    #[test]
    fn test_search_then_open_shows_match() {
        let mut api = LxApi::new(MemoryClipboard::default());
        let out = browse_errors(&mut api, "/denied\nopen 2\nquit\n");
        assert!(out.contains("Found 1 error"));
        assert!(out.contains("  ▾  2. Permission denied"));
    }

    #[test]
    fn test_no_results_message() {
        let mut api = LxApi::new(MemoryClipboard::default());
        let out = browse_errors(&mut api, "/zzz\n");
        assert!(out.contains("No errors found matching your search."));
    }

    #[test]
    fn test_copy_marks_block_and_writes_clipboard() {
        let mut api = LxApi::new(MemoryClipboard::default());
        let out = browse_errors(&mut api, "copy 1\n");
        assert!(out.contains("Copied command not found to clipboard"));
        assert!(out.contains("[Copied!]"));
        assert!(api
            .clipboard()
            .contents()
            .unwrap()
            .contains("which git"));
    }

    #[test]
    fn test_clipboard_failure_is_shown_and_session_continues() {
        let mut api = LxApi::new(FailingClipboard);
        let out = browse_errors(&mut api, "copy 1\nopen 2\n");
        assert!(out.contains("Failed to copy to clipboard"));
        assert!(!out.contains("[Copied!]"));
        assert!(out.contains("  ▾  2. Permission denied"));
    }

    #[test]
    fn test_bad_number_is_reported() {
        let mut api = LxApi::new(MemoryClipboard::default());
        let out = browse_errors(&mut api, "open 99\n");
        assert!(out.contains("No record #99 on the errors page"));
    }

    #[test]
    fn test_checklist_footer_tracks_progress() {
        colored::control::set_override(false);
        let mut api = LxApi::new(MemoryClipboard::default());
        let page = api.checklist_page();
        let mut input = Cursor::new(b"check 1\ncheck 4\ncheck 1\n".to_vec());
        let mut out = Vec::new();
        session()
            .run(&mut api, page, &mut input, &mut out, |p| Some(p.progress()))
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("2 of 10 steps complete"));
        assert!(out.trim_end().ends_with("Unchecked 1: Verify Package Installation"));
    }
}
