use thiserror::Error;

/// Why an import document was rejected. Any of these leaves the current
/// collection untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file isn't JSON at all
    #[error("Import file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an array
    #[error("Import document must be a JSON array of developers")]
    NotAnArray,

    /// An element is missing a required field or has the wrong type
    #[error("Entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    /// Two elements share an id
    #[error("Entry {index}: duplicate developer id {id}")]
    DuplicateId { index: usize, id: u64 },
}

impl ImportError {
    pub fn invalid_entry(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            index,
            reason: reason.into(),
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Json(_) => "ファイルの読み込みに失敗しました。",
            Self::NotAnArray | Self::InvalidEntry { .. } | Self::DuplicateId { .. } => {
                "無効なファイル形式です。"
            }
        }
    }
}

/// Why the tag editor refused a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagRejection {
    #[error("Tag is empty")]
    Blank,

    #[error("Tag already present: {0}")]
    Duplicate(String),
}
