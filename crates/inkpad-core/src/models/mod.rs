//! Data models for Inkpad

mod attachment;
mod note;

pub use attachment::{Attachment, NewAttachment};
pub use note::{build_note_payload, Formatting, NoteDraft, NotePayload};
