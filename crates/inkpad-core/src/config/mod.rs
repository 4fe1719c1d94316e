//! Endpoint configuration for the Inkpad backend clients.
//!
//! Base URLs are process-wide configuration injected at startup. They are
//! validated once here and treated as read-only by the clients.

use std::env;

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

const ENV_API_BASE_URL: &str = "INKPAD_API_BASE_URL";
const ENV_IMAGE_API_BASE_URL: &str = "INKPAD_IMAGE_API_BASE_URL";

/// Validated base URLs for the note API and the image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the note/attachment API.
    pub api_base_url: String,
    /// Base URL of the image upload/generation service.
    pub image_api_base_url: String,
}

impl ClientConfig {
    /// Build a configuration from explicit base URLs.
    pub fn new(api_base_url: impl AsRef<str>, image_api_base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
            image_api_base_url: normalize_base_url(image_api_base_url.as_ref())?,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` when no endpoint variables are set.
    /// Returns an error when only a partial configuration is provided.
    pub fn from_env() -> Result<Option<Self>> {
        parse_config(|key| env::var(key).ok())
    }
}

/// Normalize a base URL: trim whitespace, require an http(s) scheme, and
/// strip any trailing slash so paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(
            "base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(Error::InvalidConfiguration(
            "base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

fn parse_config(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<ClientConfig>> {
    let api_base_url = normalize_text_option(lookup(ENV_API_BASE_URL));
    let image_api_base_url = normalize_text_option(lookup(ENV_IMAGE_API_BASE_URL));

    if api_base_url.is_none() && image_api_base_url.is_none() {
        return Ok(None);
    }

    let mut missing = Vec::new();
    if api_base_url.is_none() {
        missing.push(ENV_API_BASE_URL);
    }
    if image_api_base_url.is_none() {
        missing.push(ENV_IMAGE_API_BASE_URL);
    }
    if !missing.is_empty() {
        return Err(Error::InvalidConfiguration(format!(
            "endpoint configuration is incomplete. Missing: {}",
            missing.join(", ")
        )));
    }

    Ok(Some(ClientConfig {
        api_base_url: normalize_base_url(&api_base_url.expect("validated above"))?,
        image_api_base_url: normalize_base_url(&image_api_base_url.expect("validated above"))?,
    }))
}
