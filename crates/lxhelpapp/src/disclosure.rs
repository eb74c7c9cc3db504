//! # Disclosure State
//!
//! Which records are shown expanded (or checked) is explicit state, owned by the
//! page and advanced by transition functions that take the state by value and
//! return the next one. Two policies exist:
//!
//! - [`SingleOpen`]: at most one record expanded. Used by the error lookup and
//!   the accordion guides. Toggling the open record collapses it; toggling any
//!   other record replaces it. Every query change collapses, so the page never
//!   shows detail for a record that may have been filtered away.
//! - [`IndependentToggle`]: one boolean per record, default `false`. Used by the
//!   troubleshooting checklist. Query changes leave it alone.
//!
//! Neither policy validates ids. Toggling an id that is not in the current view
//! is accepted; the renderer only ever asks about records it is showing, so a
//! stale id simply reads as collapsed.

use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strategy interface implemented by both policies.
pub trait Disclosure: Default {
    fn toggle(self, id: RecordId) -> Self;

    /// Called before the filter is re-run for `query`.
    fn on_query_changed(self, query: &str) -> Self;

    fn is_open(&self, id: RecordId) -> bool;

    /// Ids currently expanded or checked, in id order.
    fn open_ids(&self) -> Vec<RecordId>;
}

/// What a single-open page shows before the user does anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialDisclosure {
    #[default]
    None,
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum SingleOpen {
    #[default]
    Collapsed,
    ExpandedOn(RecordId),
}

impl SingleOpen {
    pub fn initial<T>(policy: InitialDisclosure, records: &[Record<T>]) -> Self {
        match (policy, records.first()) {
            (InitialDisclosure::First, Some(first)) => SingleOpen::ExpandedOn(first.id),
            _ => SingleOpen::Collapsed,
        }
    }

    pub fn expanded(&self) -> Option<RecordId> {
        match self {
            SingleOpen::Collapsed => None,
            SingleOpen::ExpandedOn(id) => Some(*id),
        }
    }
}

impl Disclosure for SingleOpen {
    fn toggle(self, id: RecordId) -> Self {
        match self {
            SingleOpen::ExpandedOn(open) if open == id => SingleOpen::Collapsed,
            _ => SingleOpen::ExpandedOn(id),
        }
    }

    fn on_query_changed(self, _query: &str) -> Self {
        SingleOpen::Collapsed
    }

    fn is_open(&self, id: RecordId) -> bool {
        self.expanded() == Some(id)
    }

    fn open_ids(&self) -> Vec<RecordId> {
        self.expanded().into_iter().collect()
    }
}

/// Sparse per-record booleans; an absent id reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndependentToggle {
    states: BTreeMap<RecordId, bool>,
}

impl IndependentToggle {
    pub fn is_checked(&self, id: RecordId) -> bool {
        self.states.get(&id).copied().unwrap_or(false)
    }

    pub fn checked_count(&self) -> usize {
        self.states.values().filter(|checked| **checked).count()
    }
}

impl Disclosure for IndependentToggle {
    fn toggle(mut self, id: RecordId) -> Self {
        let state = self.states.entry(id).or_insert(false);
        *state = !*state;
        self
    }

    fn on_query_changed(self, _query: &str) -> Self {
        self
    }

    fn is_open(&self, id: RecordId) -> bool {
        self.is_checked(id)
    }

    fn open_ids(&self) -> Vec<RecordId> {
        self.states
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| *id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::three_errors;

    fn id(n: usize) -> RecordId {
        RecordId::new(n)
    }

    #[test]
    fn test_toggle_expands_then_collapses() {
        let state = SingleOpen::Collapsed.toggle(id(5));
        assert_eq!(state, SingleOpen::ExpandedOn(id(5)));
        assert_eq!(state.toggle(id(5)), SingleOpen::Collapsed);
    }

    #[test]
    fn test_toggling_another_record_replaces_the_open_one() {
        let state = SingleOpen::Collapsed.toggle(id(5)).toggle(id(7));
        assert_eq!(state, SingleOpen::ExpandedOn(id(7)));
        assert!(!state.is_open(id(5)));
        assert_eq!(state.open_ids(), vec![id(7)]);
    }

    #[test]
    fn test_query_change_always_collapses() {
        let state = SingleOpen::ExpandedOn(id(3));
        assert_eq!(state.on_query_changed("x"), SingleOpen::Collapsed);
        assert_eq!(
            SingleOpen::Collapsed.on_query_changed(""),
            SingleOpen::Collapsed
        );
    }

    #[test]
    fn test_initial_policy_picks_first_record_or_nothing() {
        let store = three_errors();
        assert_eq!(
            SingleOpen::initial(InitialDisclosure::First, store.records()),
            SingleOpen::ExpandedOn(id(0))
        );
        assert_eq!(
            SingleOpen::initial(InitialDisclosure::None, store.records()),
            SingleOpen::Collapsed
        );
        assert_eq!(
            SingleOpen::initial::<()>(InitialDisclosure::First, &[]),
            SingleOpen::Collapsed
        );
    }

    #[test]
    fn test_independent_toggle_flips_only_its_key() {
        let item = |key: &str| key.parse::<RecordId>().unwrap();

        let state = IndependentToggle::default().toggle(item("item-2"));
        assert!(state.is_checked(item("item-2")));
        assert!(!state.is_checked(item("item-0")));
        assert!(!state.is_checked(item("item-5")));
        assert_eq!(state.checked_count(), 1);

        let state = state.toggle(item("item-5")).toggle(item("item-2"));
        assert!(!state.is_checked(item("item-2")));
        assert!(state.is_checked(item("item-5")));
        assert!(!state.is_checked(item("item-0")));
        assert_eq!(state.open_ids(), vec![item("item-5")]);
    }

    #[test]
    fn test_independent_toggle_survives_query_changes() {
        let state = IndependentToggle::default().toggle(id(1));
        let after = state.clone().on_query_changed("disk");
        assert_eq!(state, after);
    }

    #[test]
    fn test_single_open_serializes_with_state_tag() {
        let json = serde_json::to_string(&SingleOpen::ExpandedOn(id(4))).unwrap();
        assert_eq!(json, r#"{"state":"expanded_on","id":4}"#);
        let json = serde_json::to_string(&SingleOpen::Collapsed).unwrap();
        assert_eq!(json, r#"{"state":"collapsed"}"#);
    }
}
