//! inkpad-core - Core client library for Inkpad
//!
//! This crate contains the note payload normalizer and the HTTP clients the
//! Inkpad UI layers use to talk to the backend: attachment CRUD scoped to a
//! note, and image upload / sketch-to-image generation.

pub mod attachments;
pub mod auth;
pub mod config;
pub mod error;
pub mod images;
pub mod models;
pub mod util;

pub use error::{Error, Result};
pub use models::{build_note_payload, Attachment, NoteDraft, NotePayload};
