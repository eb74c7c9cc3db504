use thiserror::Error;

#[derive(Error, Debug)]
pub enum LxError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("No record #{number} on the {page} page")]
    RecordNotFound { page: String, number: usize },

    #[error("Invalid {kind} record at position {ordinal}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        ordinal: usize,
        reason: &'static str,
    },

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Record #{0} has nothing to copy")]
    NothingToCopy(usize),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LxError>;
