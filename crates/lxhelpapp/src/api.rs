//! # API Facade
//!
//! The API layer is a **thin facade** over pages and the catalog. It is the single
//! entry point clients use, regardless of how they draw things.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Opens pages** with the right store and initial disclosure
//! - **Normalizes inputs**: one-based record numbers become [`RecordId`]s
//! - **Reports outcomes** as [`CmdResult`] messages
//!
//! ## What the API Does NOT Do
//!
//! - **Filtering or state transitions**: those live in `filter.rs` and `disclosure.rs`
//! - **I/O**: apart from handing text to its [`Clipboard`], nothing is printed
//!
//! ## Clipboard Failures
//!
//! A refused clipboard write is not an error of the operation. [`LxApi::copy`]
//! returns `Ok` with a warning message, so a client can tell the user without
//! aborting whatever it was doing. Bad record numbers are real errors.
//!
//! ## Generic Over Clipboard
//!
//! `LxApi<C: Clipboard>` is generic over the clipboard backend:
//! - Production: `LxApi<SystemClipboard>`
//! - Testing: `LxApi<MemoryClipboard>`

use crate::catalog::{self, PageKind};
use crate::clipboard::{Clipboard, COPY_FEEDBACK};
use crate::config::LxConfig;
use crate::disclosure::{Disclosure, IndependentToggle, SingleOpen};
use crate::error::{LxError, Result};
use crate::model::{AccordionItem, ChecklistItem, Entry, ErrorEntry, RecordId};
use crate::page::Page;
use serde::Serialize;
use std::time::{Duration, Instant};

pub type ErrorPage = Page<'static, ErrorEntry, SingleOpen>;
pub type GuidePage = Page<'static, AccordionItem, SingleOpen>;
pub type ChecklistPage = Page<'static, ChecklistItem, IndependentToggle>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// Listing entry for one bundled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub records: usize,
}

pub struct LxApi<C: Clipboard> {
    clipboard: C,
    feedback: Duration,
}

impl<C: Clipboard> LxApi<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            feedback: COPY_FEEDBACK,
        }
    }

    pub fn with_config(clipboard: C, config: &LxConfig) -> Self {
        Self {
            clipboard,
            feedback: config.copy_feedback(),
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn pages(&self) -> Vec<PageInfo> {
        PageKind::ALL
            .iter()
            .map(|kind| PageInfo {
                name: kind.name(),
                title: kind.title(),
                description: kind.description(),
                records: kind.record_count(),
            })
            .collect()
    }

    pub fn error_page(&self) -> ErrorPage {
        let store = catalog::errors();
        let initial = SingleOpen::initial(PageKind::Errors.initial_disclosure(), store.records());
        Page::new(PageKind::Errors.name(), store, initial).with_copy_feedback(self.feedback)
    }

    pub fn guide_page(&self, kind: PageKind) -> Result<GuidePage> {
        let store = catalog::guide(kind)?;
        let initial = SingleOpen::initial(kind.initial_disclosure(), store.records());
        Ok(Page::new(kind.name(), store, initial).with_copy_feedback(self.feedback))
    }

    pub fn checklist_page(&self) -> ChecklistPage {
        Page::new(
            PageKind::Troubleshooting.name(),
            catalog::checklist(),
            IndependentToggle::default(),
        )
        .with_copy_feedback(self.feedback)
    }

    /// Sets the query and reports the match count.
    pub fn search<T: Entry, D: Disclosure>(
        &self,
        page: &mut Page<'_, T, D>,
        query: &str,
    ) -> CmdResult {
        page.set_query(query);
        let mut result = CmdResult::default();
        if let Some(summary) = page.summary() {
            result.add_message(CmdMessage::info(summary));
        }
        if page.results().is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "No {}s found matching your search.",
                T::NOUN
            )));
        }
        result
    }

    /// Toggles the record shown as `number`.
    pub fn toggle<T: Entry, D: Disclosure>(
        &self,
        page: &mut Page<'_, T, D>,
        number: usize,
    ) -> Result<CmdResult> {
        let id = resolve(page, number)?;
        page.toggle(id);
        let title = record_title(page, id);
        let verb = match (T::NOUN, page.is_open(id)) {
            ("step", true) => "Checked",
            ("step", false) => "Unchecked",
            (_, true) => "Expanded",
            (_, false) => "Collapsed",
        };
        Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} {}: {}",
            verb, number, title
        ))))
    }

    /// Opens the record shown as `number`, leaving it alone if already open.
    ///
    /// A record hidden by the current query is not touched; the caller gets a
    /// warning instead.
    pub fn open<T: Entry, D: Disclosure>(
        &self,
        page: &mut Page<'_, T, D>,
        number: usize,
    ) -> Result<CmdResult> {
        let id = resolve(page, number)?;
        if !page.results().iter().any(|r| r.id == id) {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "{} {} is hidden by the current search",
                capitalize(T::NOUN),
                number
            ))));
        }
        if page.is_open(id) {
            return Ok(CmdResult::default());
        }
        self.toggle(page, number)
    }

    /// Copies the code block of the record shown as `number`.
    ///
    /// Clipboard refusals come back as a warning, not an `Err`.
    pub fn copy<T: Entry, D: Disclosure>(
        &mut self,
        page: &mut Page<'_, T, D>,
        number: usize,
        now: Instant,
    ) -> Result<CmdResult> {
        let id = resolve(page, number)?;
        match page.copy(id, &mut self.clipboard, now) {
            Ok(()) => Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "Copied {} to clipboard",
                record_title(page, id)
            )))),
            Err(LxError::Clipboard(reason)) => Ok(CmdResult::default().with_message(
                CmdMessage::warning(format!("Failed to copy to clipboard: {}", reason)),
            )),
            Err(e) => Err(e),
        }
    }
}

/// Maps a one-based number to the record id it names on `page`.
pub fn resolve<T: Entry, D: Disclosure>(page: &Page<'_, T, D>, number: usize) -> Result<RecordId> {
    RecordId::from_number(number)
        .filter(|id| page.store().get(*id).is_some())
        .ok_or_else(|| LxError::RecordNotFound {
            page: page.name().to_string(),
            number,
        })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn record_title<T: Entry, D: Disclosure>(page: &Page<'_, T, D>, id: RecordId) -> String {
    page.store()
        .get(id)
        .map(|r| r.title().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingClipboard, MemoryClipboard};

    #[test]
    fn test_pages_lists_all_bundled_pages() {
        let api = LxApi::new(MemoryClipboard::default());
        let names: Vec<_> = api.pages().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["installation", "terminal", "errors", "troubleshooting"]
        );
        assert!(api.pages().iter().all(|p| p.records > 0));
    }

    #[test]
    fn test_error_page_opens_first_record() {
        let api = LxApi::new(MemoryClipboard::default());
        let page = api.error_page();
        assert!(page.is_open(RecordId::new(0)));
        assert_eq!(page.visible().len(), 10);
    }

    #[test]
    fn test_checklist_starts_unchecked() {
        let api = LxApi::new(MemoryClipboard::default());
        let page = api.checklist_page();
        assert_eq!(page.progress().done, 0);
        assert_eq!(page.progress().total, 10);
    }

    #[test]
    fn test_guide_page_rejects_non_guides() {
        let api = LxApi::new(MemoryClipboard::default());
        assert!(api.guide_page(PageKind::Terminal).is_ok());
        assert!(matches!(
            api.guide_page(PageKind::Troubleshooting),
            Err(LxError::UnknownPage(_))
        ));
    }

    #[test]
    fn test_search_reports_matches_and_empty_results() {
        let api = LxApi::new(MemoryClipboard::default());
        let mut page = api.error_page();

        let result = api.search(&mut page, "denied");
        assert_eq!(result.messages, vec![CmdMessage::info("Found 1 error")]);

        let result = api.search(&mut page, "zzz");
        assert!(result.has_warnings());
        assert_eq!(
            result.messages[1].content,
            "No errors found matching your search."
        );

        let result = api.search(&mut page, "");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_toggle_uses_one_based_numbers() {
        let api = LxApi::new(MemoryClipboard::default());
        let mut page = api.checklist_page();

        let result = api.toggle(&mut page, 3).unwrap();
        assert!(page.is_open(RecordId::new(2)));
        assert_eq!(
            result.messages[0].content,
            "Checked 3: Verify File Permissions"
        );

        assert!(matches!(
            api.toggle(&mut page, 0),
            Err(LxError::RecordNotFound { number: 0, .. })
        ));
        assert!(matches!(
            api.toggle(&mut page, 11),
            Err(LxError::RecordNotFound { number: 11, .. })
        ));
    }

    #[test]
    fn test_open_skips_records_hidden_by_query() {
        let api = LxApi::new(MemoryClipboard::default());
        let mut page = api.error_page();
        api.search(&mut page, "denied");

        let result = api.open(&mut page, 1).unwrap();
        assert!(result.has_warnings());
        assert_eq!(
            result.messages[0].content,
            "Error 1 is hidden by the current search"
        );
        assert!(!page.is_open(RecordId::new(0)));

        let result = api.open(&mut page, 2).unwrap();
        assert_eq!(result.messages[0].content, "Expanded 2: Permission denied");
        assert!(page.is_open(RecordId::new(1)));

        // already open: no toggle back
        assert!(api.open(&mut page, 2).unwrap().messages.is_empty());
        assert!(page.is_open(RecordId::new(1)));
    }

    #[test]
    fn test_copy_success_writes_solution() {
        let mut api = LxApi::new(MemoryClipboard::default());
        let mut page = api.error_page();
        let result = api.copy(&mut page, 2, Instant::now()).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(api
            .clipboard()
            .contents()
            .unwrap()
            .starts_with("1. Make file executable:\n   chmod +x script.sh"));
    }

    #[test]
    fn test_copy_failure_is_a_warning() {
        let mut api = LxApi::new(FailingClipboard);
        let mut page = api.error_page();
        let now = Instant::now();
        let result = api.copy(&mut page, 1, now).unwrap();

        assert!(result.has_warnings());
        assert!(result.messages[0]
            .content
            .starts_with("Failed to copy to clipboard"));
        assert!(!page.is_copied_at(RecordId::new(0), now));
    }

    #[test]
    fn test_copy_section_without_code_is_an_error() {
        let mut api = LxApi::new(MemoryClipboard::default());
        let mut page = api.guide_page(PageKind::Terminal).unwrap();
        // "Common Shells" is prose only
        assert!(matches!(
            api.copy(&mut page, 1, Instant::now()),
            Err(LxError::NothingToCopy(1))
        ));
    }

    #[test]
    fn test_copy_feedback_follows_config() {
        let config = LxConfig {
            copy_feedback_ms: 100,
            ..Default::default()
        };
        let mut api = LxApi::with_config(MemoryClipboard::default(), &config);
        let mut page = api.error_page();
        let t0 = Instant::now();
        api.copy(&mut page, 1, t0).unwrap();
        assert_eq!(
            page.poll(t0 + Duration::from_millis(100)),
            vec![RecordId::new(0)]
        );
    }
}
