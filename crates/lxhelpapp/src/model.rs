use crate::error::LxError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Stable ordinal position of a record within its store.
///
/// Ids are assigned once, in insertion order, when a [`crate::store::RecordStore`]
/// is built. Filtering never renumbers them.
///
/// The textual form is `item-N` (zero-based), which is also how checklist keys
/// are spelled. Users see one-based numbers instead; see [`RecordId::number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(usize);

impl RecordId {
    pub const fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    pub const fn ordinal(self) -> usize {
        self.0
    }

    /// One-based number shown to users ("Step 3").
    pub const fn number(self) -> usize {
        self.0 + 1
    }

    /// Inverse of [`RecordId::number`]. Zero is not a valid number.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = LxError;

    /// Accepts `item-N` or a bare ordinal `N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("item-").unwrap_or(s);
        digits
            .parse::<usize>()
            .map(Self)
            .map_err(|_| LxError::InvalidId(s.to_string()))
    }
}

/// Shape shared by every kind of record.
///
/// Implementors decide which of their fields are searchable and what gets copied;
/// everything else is detail, shown only when the record is expanded and never
/// searched.
pub trait Entry {
    /// Singular noun used in summaries, e.g. "Found 2 errors".
    const NOUN: &'static str;

    /// Primary title. Stores refuse records where this is blank.
    fn title(&self) -> &str;

    /// Fields eligible for matching, title first.
    fn searchable_fields(&self) -> Vec<&str>;

    /// The code block offered by the copy button, if the record has one.
    fn copy_text(&self) -> Option<Cow<'_, str>>;
}

/// An entry on the error lookup page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// The message as the shell prints it, e.g. "Permission denied".
    pub error: String,
    pub meaning: String,
    pub causes: Vec<String>,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Entry for ErrorEntry {
    const NOUN: &'static str = "error";

    fn title(&self) -> &str {
        &self.error
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.causes.len());
        fields.push(self.error.as_str());
        fields.push(self.meaning.as_str());
        fields.extend(self.causes.iter().map(String::as_str));
        fields
    }

    fn copy_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.solution))
    }
}

/// A step on the troubleshooting checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub title: String,
    pub description: String,
    /// Commands with trailing `# comments`, one per line.
    pub commands: Vec<String>,
    pub notes: String,
}

impl Entry for ChecklistItem {
    const NOUN: &'static str = "step";

    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn copy_text(&self) -> Option<Cow<'_, str>> {
        if self.commands.is_empty() {
            None
        } else {
            Some(Cow::Owned(self.commands.join("\n")))
        }
    }
}

/// A collapsible section on the terminal and installation guides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Entry for AccordionItem {
    const NOUN: &'static str = "section";

    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str()]
    }

    fn copy_text(&self) -> Option<Cow<'_, str>> {
        self.code.as_deref().map(Cow::Borrowed)
    }
}

/// A record as held by a store: its id plus the entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<T> {
    pub id: RecordId,
    pub entry: T,
}

impl<T: Entry> Record<T> {
    pub fn title(&self) -> &str {
        self.entry.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parses_item_keys_and_bare_ordinals() {
        assert_eq!("item-2".parse::<RecordId>().unwrap(), RecordId::new(2));
        assert_eq!("7".parse::<RecordId>().unwrap(), RecordId::new(7));
        assert!("item-".parse::<RecordId>().is_err());
        assert!("two".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_record_id_display_matches_checklist_keys() {
        assert_eq!(RecordId::new(0).to_string(), "item-0");
        assert_eq!(RecordId::new(5).to_string(), "item-5");
    }

    #[test]
    fn test_record_id_numbers_are_one_based() {
        assert_eq!(RecordId::new(0).number(), 1);
        assert_eq!(RecordId::from_number(3), Some(RecordId::new(2)));
        assert_eq!(RecordId::from_number(0), None);
    }

    #[test]
    fn test_error_entry_searches_title_meaning_and_causes() {
        let entry = ErrorEntry {
            error: "Permission denied".into(),
            meaning: "Not allowed".into(),
            causes: vec!["File is not executable".into(), "Sudo required".into()],
            solution: "chmod +x script.sh".into(),
            example: None,
        };
        assert_eq!(
            entry.searchable_fields(),
            vec![
                "Permission denied",
                "Not allowed",
                "File is not executable",
                "Sudo required"
            ]
        );
        assert_eq!(entry.copy_text().as_deref(), Some("chmod +x script.sh"));
    }

    #[test]
    fn test_checklist_copy_joins_commands() {
        let item = ChecklistItem {
            title: "Verify Disk Space".into(),
            description: "Check usage".into(),
            commands: vec!["df -h".into(), "df -i".into()],
            notes: String::new(),
        };
        assert_eq!(item.copy_text().as_deref(), Some("df -h\ndf -i"));
        assert_eq!(item.searchable_fields(), vec!["Verify Disk Space", "Check usage"]);
    }

    #[test]
    fn test_accordion_without_code_has_nothing_to_copy() {
        let item = AccordionItem {
            title: "Shells Overview".into(),
            summary: "bash, zsh, fish".into(),
            body: String::new(),
            code: None,
        };
        assert!(item.copy_text().is_none());
    }
}
