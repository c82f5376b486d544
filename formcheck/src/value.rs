use serde::{Deserialize, Serialize};

/// Metadata for a file attached to a file control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Value extracted from a field at evaluation time.
///
/// Never stored; recomputed from the form on every evaluation. For choice
/// groups this is the value of the checked member (empty string when nothing
/// is checked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Files(Vec<FileHandle>),
}

impl FieldValue {
    /// Text view of the value. A file collection reads as the empty string,
    /// so string rules see the same thing they would for an untyped value.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Files(_) => "",
        }
    }

    /// File view of the value. Empty for text values, so file rules pass
    /// vacuously on non-file fields.
    pub fn files(&self) -> &[FileHandle] {
        match self {
            FieldValue::Files(files) => files,
            FieldValue::Text(_) => &[],
        }
    }

    /// Length of the text view in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.as_text().chars().count()
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}
