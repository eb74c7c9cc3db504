//! # Pages
//!
//! A [`Page`] is one view of a record store as a user sees it: the current query,
//! the records it matches, which of them are open (or checked), and the copy
//! buttons that have been pressed. The same type serves every page; what differs
//! is the store and the disclosure policy it is instantiated with.
//!
//! ## Event Flow
//!
//! ```text
//! set_query(q) ──► disclosure.on_query_changed(q) ──► filter(store, q)
//! toggle(id)   ──► disclosure.toggle(id)
//! copy(id)     ──► code block for id ──► clipboard ──► "Copied!" until deadline
//! poll(now)    ──► apply due resets
//! teardown()   ──► cancel pending resets
//! ```
//!
//! [`Page::visible`] is the reconciliation point. It walks the filtered records and
//! asks the disclosure state about each one, so an expanded id that the current
//! query hides is never rendered as open.

use crate::clipboard::{Clipboard, CodeBlock, COPY_FEEDBACK};
use crate::disclosure::{Disclosure, IndependentToggle};
use crate::error::{LxError, Result};
use crate::filter::filter;
use crate::model::{Entry, Record, RecordId};
use crate::store::RecordStore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

pub struct Page<'s, T, D> {
    name: String,
    store: &'s RecordStore<T>,
    query: String,
    disclosure: D,
    blocks: BTreeMap<RecordId, CodeBlock>,
    feedback: Duration,
}

/// One filtered record as the renderer should show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView<'s, T> {
    pub id: RecordId,
    pub number: usize,
    pub open: bool,
    pub entry: &'s T,
}

/// Read-only state of a page at one instant, for renderers.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot<'s, T> {
    pub page: String,
    pub query: String,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub results: Vec<RecordView<'s, T>>,
    pub open: Vec<RecordId>,
    pub copied: Vec<RecordId>,
}

/// How many checklist steps are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} steps complete", self.done, self.total)
    }
}

impl<'s, T: Entry, D: Disclosure> Page<'s, T, D> {
    pub fn new(name: impl Into<String>, store: &'s RecordStore<T>, disclosure: D) -> Self {
        Self {
            name: name.into(),
            store,
            query: String::new(),
            disclosure,
            blocks: BTreeMap::new(),
            feedback: COPY_FEEDBACK,
        }
    }

    /// How long copy buttons show "Copied!".
    pub fn with_copy_feedback(mut self, window: Duration) -> Self {
        self.feedback = window;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &'s RecordStore<T> {
        self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn disclosure(&self) -> &D {
        &self.disclosure
    }

    /// Replaces the query. Single-open pages collapse on every call.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.disclosure = std::mem::take(&mut self.disclosure).on_query_changed(&query);
        self.query = query;
        tracing::debug!(
            page = %self.name,
            query = %self.query,
            matches = self.results().len(),
            "query changed"
        );
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Records matching the current query, in store order.
    pub fn results(&self) -> Vec<&'s Record<T>> {
        filter(self.store, &self.query)
    }

    pub fn toggle(&mut self, id: RecordId) {
        self.disclosure = std::mem::take(&mut self.disclosure).toggle(id);
        tracing::debug!(page = %self.name, %id, open = self.disclosure.is_open(id), "toggled");
    }

    pub fn is_open(&self, id: RecordId) -> bool {
        self.disclosure.is_open(id)
    }

    pub fn visible(&self) -> Vec<RecordView<'s, T>> {
        self.results()
            .into_iter()
            .map(|record| RecordView {
                id: record.id,
                number: record.id.number(),
                open: self.disclosure.is_open(record.id),
                entry: &record.entry,
            })
            .collect()
    }

    /// "Found 3 errors" while a query is active.
    pub fn summary(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let count = self.results().len();
        let plural = if count == 1 { "" } else { "s" };
        Some(format!("Found {} {}{}", count, T::NOUN, plural))
    }

    /// Copies the code block of record `id` and raises its acknowledgment.
    pub fn copy<C: Clipboard + ?Sized>(
        &mut self,
        id: RecordId,
        clipboard: &mut C,
        now: Instant,
    ) -> Result<()> {
        let record = self.store.get(id).ok_or_else(|| LxError::RecordNotFound {
            page: self.name.clone(),
            number: id.number(),
        })?;
        let text = record
            .entry
            .copy_text()
            .ok_or(LxError::NothingToCopy(id.number()))?;

        let feedback = self.feedback;
        let block = self
            .blocks
            .entry(id)
            .or_insert_with(|| CodeBlock::with_feedback(text.into_owned(), feedback));

        block.copy(clipboard, now).inspect_err(|e| {
            tracing::warn!(page = %self.name, %id, error = %e, "copy failed");
        })
    }

    pub fn is_copied_at(&self, id: RecordId, now: Instant) -> bool {
        self.blocks
            .get(&id)
            .is_some_and(|block| block.is_copied_at(now))
    }

    /// Applies due acknowledgment resets; returns the ids that just cleared.
    pub fn poll(&mut self, now: Instant) -> Vec<RecordId> {
        self.blocks
            .iter_mut()
            .filter_map(|(id, block)| block.poll(now).then_some(*id))
            .collect()
    }

    pub fn snapshot(&self, now: Instant) -> PageSnapshot<'s, T> {
        let results = self.visible();
        let open = results.iter().filter(|v| v.open).map(|v| v.id).collect();
        let copied = self
            .blocks
            .iter()
            .filter(|(_, block)| block.is_copied_at(now))
            .map(|(id, _)| *id)
            .collect();
        PageSnapshot {
            page: self.name.clone(),
            query: self.query.clone(),
            total: self.store.len(),
            summary: self.summary(),
            results,
            open,
            copied,
        }
    }

    /// Ends the page view. Pending acknowledgment resets are cancelled and
    /// their count returned.
    pub fn teardown(self) -> usize {
        let cancelled = self
            .blocks
            .into_values()
            .map(CodeBlock::teardown)
            .filter(|was_pending| *was_pending)
            .count();
        tracing::debug!(page = %self.name, cancelled, "page torn down");
        cancelled
    }
}

impl<'s, T: Entry> Page<'s, T, IndependentToggle> {
    pub fn progress(&self) -> Progress {
        Progress {
            done: self
                .store
                .iter()
                .filter(|r| self.disclosure.is_checked(r.id))
                .count(),
            total: self.store.len(),
        }
    }
}
