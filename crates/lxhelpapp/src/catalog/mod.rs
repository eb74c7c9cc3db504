//! # Bundled Catalog
//!
//! The content shipped with lxhelp: four pages, each backed by an immutable
//! [`RecordStore`] built on first use.
//!
//! | Page | Records | Policy | Initially open |
//! |------|---------|--------|----------------|
//! | `errors` | [`ErrorEntry`] | single-open | first |
//! | `troubleshooting` | [`ChecklistItem`] | independent-toggle | none |
//! | `terminal` | [`AccordionItem`] | single-open | first |
//! | `installation` | [`AccordionItem`] | single-open | first |

use crate::disclosure::InitialDisclosure;
use crate::error::{LxError, Result};
use crate::model::{AccordionItem, ChecklistItem, ErrorEntry};
use crate::store::RecordStore;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

mod checklist;
mod errors;
mod guides;

static ERRORS: Lazy<RecordStore<ErrorEntry>> =
    Lazy::new(|| RecordStore::new(errors::entries()).expect("bundled errors have titles"));

static CHECKLIST: Lazy<RecordStore<ChecklistItem>> =
    Lazy::new(|| RecordStore::new(checklist::entries()).expect("bundled steps have titles"));

static TERMINAL: Lazy<RecordStore<AccordionItem>> =
    Lazy::new(|| RecordStore::new(guides::terminal()).expect("bundled sections have titles"));

static INSTALLATION: Lazy<RecordStore<AccordionItem>> = Lazy::new(|| {
    RecordStore::new(guides::installation()).expect("bundled sections have titles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Errors,
    Troubleshooting,
    Terminal,
    Installation,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Installation,
        PageKind::Terminal,
        PageKind::Errors,
        PageKind::Troubleshooting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageKind::Errors => "errors",
            PageKind::Troubleshooting => "troubleshooting",
            PageKind::Terminal => "terminal",
            PageKind::Installation => "installation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKind::Errors => "Common Linux Errors Reference",
            PageKind::Troubleshooting => "Troubleshooting Checklist",
            PageKind::Terminal => "Terminal & Shell Basics",
            PageKind::Installation => "Linux Installation Guide",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PageKind::Errors => {
                "Searchable lookup for common Linux errors with explanations and solutions."
            }
            PageKind::Troubleshooting => {
                "Safe, structured steps to diagnose and resolve Linux problems without destructive commands."
            }
            PageKind::Terminal => {
                "Master the command line with Bash, Zsh, and essential shell concepts."
            }
            PageKind::Installation => {
                "Installing packages and developer tools with apt, dnf, pacman, or from source."
            }
        }
    }

    pub fn initial_disclosure(self) -> InitialDisclosure {
        match self {
            PageKind::Troubleshooting => InitialDisclosure::None,
            _ => InitialDisclosure::First,
        }
    }

    pub fn record_count(self) -> usize {
        match self {
            PageKind::Errors => errors().len(),
            PageKind::Troubleshooting => checklist().len(),
            PageKind::Terminal => terminal().len(),
            PageKind::Installation => installation().len(),
        }
    }

    pub fn is_guide(self) -> bool {
        matches!(self, PageKind::Terminal | PageKind::Installation)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageKind {
    type Err = LxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "errors" | "error" => Ok(PageKind::Errors),
            "troubleshooting" | "checklist" => Ok(PageKind::Troubleshooting),
            "terminal" | "shell" => Ok(PageKind::Terminal),
            "installation" | "install" => Ok(PageKind::Installation),
            _ => Err(LxError::UnknownPage(s.to_string())),
        }
    }
}

pub fn errors() -> &'static RecordStore<ErrorEntry> {
    &ERRORS
}

pub fn checklist() -> &'static RecordStore<ChecklistItem> {
    &CHECKLIST
}

pub fn terminal() -> &'static RecordStore<AccordionItem> {
    &TERMINAL
}

pub fn installation() -> &'static RecordStore<AccordionItem> {
    &INSTALLATION
}

/// The accordion store behind a guide page.
pub fn guide(kind: PageKind) -> Result<&'static RecordStore<AccordionItem>> {
    match kind {
        PageKind::Terminal => Ok(terminal()),
        PageKind::Installation => Ok(installation()),
        other => Err(LxError::UnknownPage(format!("{} is not a guide", other))),
    }
}

/// A general tip shown under the error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIPS: [Tip; 4] = [
    Tip {
        title: "Read the Full Error",
        body: "Error messages often contain the exact line number and context. \
               Always read the complete message, not just the first line.",
    },
    Tip {
        title: "Check Logs",
        body: "System logs provide detailed information. Check /var/log/ or use \
               journalctl for system service logs.",
    },
    Tip {
        title: "Verify Permissions",
        body: "Many errors are permission-related. Use ls -l to check file permissions \
               and whoami to check current user.",
    },
    Tip {
        title: "Search Online",
        body: "Search the exact error message online. Often others have solved the same \
               problem and documented the solution.",
    },
];
