use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{message}")]
    Storage { message: String },
}

/// One page of a bucket listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectPage {
    pub keys: Vec<String>,
    pub next_continuation_token: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum CopyStatus {
    Success,
    #[serde(rename = "No files to copy")]
    NoFilesToCopy,
}

/// Summary handed back to the invoking runtime.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CopyResult {
    pub status: CopyStatus,
    #[serde(rename = "files", skip_serializing_if = "Option::is_none")]
    pub copied_keys: Option<Vec<String>>,
}

impl CopyResult {
    pub fn success(copied_keys: Vec<String>) -> Self {
        Self {
            status: CopyStatus::Success,
            copied_keys: Some(copied_keys),
        }
    }

    pub fn no_files() -> Self {
        Self {
            status: CopyStatus::NoFilesToCopy,
            copied_keys: None,
        }
    }

    pub fn keys(&self) -> &[String] {
        self.copied_keys.as_deref().unwrap_or(&[])
    }
}
