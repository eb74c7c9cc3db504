//! Free-text filtering of records.
//!
//! Matching is a case-insensitive substring test against each record's
//! [`Entry::searchable_fields`]. A record is kept when any one field contains the
//! query. There is no tokenizing, no fuzziness and no ranking: results always come
//! back in the order they went in, so filtering a store yields records in store
//! order.
//!
//! The empty string is the only query that matches everything. Whitespace is not
//! trimmed, so `" "` only matches records that contain a space.

use crate::model::{Entry, Record};

/// Returns the records matching `query`, preserving input order.
///
/// Accepts anything that yields `&Record<T>`, so the output of one call can be
/// fed straight back in.
pub fn filter<'a, T, I>(records: I, query: &str) -> Vec<&'a Record<T>>
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a Record<T>>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches(&record.entry, &needle))
        .collect()
}

/// True if any searchable field of `entry` contains `needle`.
///
/// `needle` must already be lowercased.
pub fn matches<T: Entry>(entry: &T, needle: &str) -> bool {
    entry
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorEntry;
    use crate::store::RecordStore;
    use crate::test_utils::{error_entry, three_errors};

    fn titles<T: Entry>(records: &[&Record<T>]) -> Vec<String> {
        records.iter().map(|r| r.title().to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let store = three_errors();
        let all = filter(&store, "");
        assert_eq!(all.len(), store.len());
        assert!(all.iter().zip(store.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_matches_single_record_by_title_fragment() {
        let store = three_errors();
        assert_eq!(titles(&filter(&store, "denied")), vec!["Permission denied"]);
        assert_eq!(titles(&filter(&store, "disk")), vec!["disk quota exceeded"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let store = three_errors();
        assert!(filter(&store, "zzz").is_empty());
    }

    #[test]
    fn test_matching_ignores_case() {
        let store = three_errors();
        let lower = filter(&store, "perm");
        let upper = filter(&store, "PERM");
        assert_eq!(titles(&lower), vec!["Permission denied"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filtering_twice_is_a_no_op() {
        let store = three_errors();
        for query in ["", "o", "denied", "zzz", "QUOTA"] {
            let once = filter(&store, query);
            let twice = filter(once.clone(), query);
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn test_single_character_queries_are_valid() {
        let store = three_errors();
        // 'q' only appears in "disk quota exceeded"
        assert_eq!(titles(&filter(&store, "q")), vec!["disk quota exceeded"]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let store = RecordStore::new(vec![error_entry("nospace"), error_entry("with space")]).unwrap();
        assert_eq!(titles(&filter(&store, " ")), vec!["with space"]);
    }

    #[test]
    fn test_secondary_fields_match_and_order_is_preserved() {
        let store = RecordStore::new(vec![
            ErrorEntry {
                causes: vec!["Program not in PATH".into()],
                ..error_entry("command not found")
            },
            error_entry("Permission denied"),
            ErrorEntry {
                meaning: "Library not in LD_LIBRARY_PATH".into(),
                ..error_entry("cannot open shared object file")
            },
        ])
        .unwrap();

        let hits = filter(&store, "path");
        assert_eq!(
            titles(&hits),
            vec!["command not found", "cannot open shared object file"]
        );
        assert_eq!(hits[1].id.ordinal(), 2);
    }

    #[test]
    fn test_solution_text_is_never_searched() {
        let store = RecordStore::new(vec![ErrorEntry {
            solution: "journalctl --vacuum=1w".into(),
            ..error_entry("disk quota exceeded")
        }])
        .unwrap();
        assert!(filter(&store, "journalctl").is_empty());
    }
}
