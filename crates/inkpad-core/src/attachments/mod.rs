//! Authenticated attachment CRUD client scoped to a note.
//!
//! Every operation is an independent round trip: the bearer token is
//! re-read from the store and a fresh request is issued each time. There is
//! no retry, caching, or coordination between in-flight calls.

use reqwest::{Client, RequestBuilder};

use crate::auth::TokenStore;
use crate::config::normalize_base_url;
use crate::error::{Error, Result};
use crate::models::{Attachment, NewAttachment};

const FETCH_FALLBACK: &str = "Failed to fetch attachments";
const ADD_FALLBACK: &str = "Failed to add attachment";
const DELETE_FALLBACK: &str = "Failed to delete attachment";

/// HTTP client for the note API's attachment endpoints.
#[derive(Clone)]
pub struct AttachmentsClient<S: TokenStore> {
    base_url: String,
    client: Client,
    store: S,
}

impl<S: TokenStore> AttachmentsClient<S> {
    /// Build a client for an explicit API base URL.
    pub fn new(base_url: impl AsRef<str>, store: S) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            client: Client::builder().build()?,
            store,
        })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the attachments of a note.
    pub async fn get_attachments(&self, note_id: i64) -> Result<Vec<Attachment>> {
        tracing::debug!(note_id, "fetching attachments");
        let request = self
            .authorized(self.client.get(self.attachments_url(note_id)))?
            .header("Accept", "application/json");

        let response = request.send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(&body, FETCH_FALLBACK));
        }
        Ok(response.json::<Vec<Attachment>>().await?)
    }

    /// Create an attachment on a note and return the stored record.
    pub async fn add_attachment(
        &self,
        note_id: i64,
        attachment: &NewAttachment,
    ) -> Result<Attachment> {
        let request = self
            .authorized(self.client.post(self.attachments_url(note_id)))?
            .json(attachment);

        let response = request.send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(&body, ADD_FALLBACK));
        }
        Ok(response.json::<Attachment>().await?)
    }

    /// Delete an attachment from a note.
    pub async fn delete_attachment(&self, note_id: i64, attachment_id: i64) -> Result<()> {
        let url = format!("{}/{attachment_id}", self.attachments_url(note_id));
        let request = self.authorized(self.client.delete(url))?;

        let response = request.send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(&body, DELETE_FALLBACK));
        }
        Ok(())
    }

    fn attachments_url(&self, note_id: i64) -> String {
        format!("{}/notes/{note_id}/attachments", self.base_url)
    }

    /// Attach the stored bearer token, or send unauthenticated when none is
    /// stored. Token storage failures propagate to the caller.
    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match self.store.load_token()? {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Ok(request),
        }
    }
}

fn api_error(body: &str, fallback: &str) -> Error {
    let message = body.trim();
    if message.is_empty() {
        Error::Api(fallback.to_string())
    } else {
        Error::Api(message.to_string())
    }
}
