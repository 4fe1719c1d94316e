//! Note draft model and wire payload normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// In-memory note state as held by the editor UI.
///
/// Every field is optional: the editor builds drafts incrementally and may
/// hand over arbitrarily partial (or malformed) state. Normalization into
/// [`NotePayload`] is the single place where defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text_contents: Option<String>,
    /// Drawing strokes; expected to be a JSON array but not trusted to be one.
    #[serde(default)]
    pub drawings: Option<Value>,
    /// Checklist entries; expected to be a JSON array but not trusted to be one.
    #[serde(default)]
    pub checklist_items: Option<Value>,
    #[serde(default)]
    pub formatting: Option<Formatting>,
    #[serde(default)]
    pub is_archived: Option<bool>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub creator_user_id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Text formatting attributes attached to a note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

impl Formatting {
    /// Whether any formatting attribute carries a meaningful value.
    ///
    /// Zero font size, empty strings, and `false` flags all count as unset;
    /// the payload omits the `formatting` key entirely in that case so the
    /// backend can tell "no formatting info" from "empty formatting".
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.font_size.is_some_and(|size| size != 0.0)
            || self.font_family.as_deref().is_some_and(|f| !f.is_empty())
            || self.is_bold == Some(true)
            || self.is_italic == Some(true)
            || self.text_align.as_deref().is_some_and(|a| !a.is_empty())
    }
}

/// Canonical submission object sent to the note API.
///
/// `drawings` and `checklistItems` travel as JSON-encoded text, never as
/// nested structures. `formatting` and `creatorUserId` are sparse: the keys
/// are absent from the serialized form when unset, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub title: String,
    pub text_contents: String,
    pub drawings: String,
    pub checklist_items: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting: Option<String>,
    pub is_archived: bool,
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<String>,
    pub updated_at: String,
}

/// Normalize a partial note draft into its canonical wire payload.
///
/// Pure and infallible: any combination of missing or malformed draft fields
/// produces a well-formed payload. Deterministic for any input that supplies
/// `updated_at`; when the draft leaves it unset the current instant is used.
#[must_use]
pub fn build_note_payload(draft: &NoteDraft) -> NotePayload {
    let formatting = draft
        .formatting
        .as_ref()
        .filter(|formatting| formatting.is_set())
        .map(encode_formatting);

    NotePayload {
        title: draft.title.clone().unwrap_or_default(),
        text_contents: draft.text_contents.clone().unwrap_or_default(),
        drawings: encode_sequence(draft.drawings.as_ref()),
        checklist_items: encode_sequence(draft.checklist_items.as_ref()),
        formatting,
        is_archived: draft.is_archived.unwrap_or(false),
        is_private: draft.is_private.unwrap_or(false),
        creator_user_id: draft
            .creator_user_id
            .clone()
            .filter(|id| !id.is_empty()),
        updated_at: draft
            .updated_at
            .clone()
            .filter(|timestamp| !timestamp.is_empty())
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
    }
}

/// Encode a value as JSON text when it is an ordered sequence.
///
/// Anything else (absent, object, scalar) encodes as an empty sequence; this
/// guards against malformed editor state reaching the wire.
fn encode_sequence(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
        _ => "[]".to_string(),
    }
}

fn encode_formatting(formatting: &Formatting) -> String {
    serde_json::to_string(formatting).unwrap_or_else(|_| "{}".to_string())
}
