//! Attachment model

use serde::{Deserialize, Serialize};

/// Attachment metadata as returned by the note API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique attachment identifier.
    pub id: i64,
    /// Parent note identifier.
    pub note_id: i64,
    /// Attachment kind, e.g. `"image"` or `"audio"`.
    pub attachment_type: String,
    /// Storage location of the attachment content.
    pub storage_path: String,
}

/// Request body for creating an attachment on a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttachment {
    pub attachment_type: String,
    pub storage_path: String,
}

impl NewAttachment {
    pub fn new(attachment_type: impl Into<String>, storage_path: impl Into<String>) -> Self {
        Self {
            attachment_type: attachment_type.into(),
            storage_path: storage_path.into(),
        }
    }
}
