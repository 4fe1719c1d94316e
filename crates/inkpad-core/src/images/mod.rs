//! Image upload and sketch-to-image generation client.
//!
//! Talks to the image service without bearer authentication. The two
//! operations deliberately return different shapes: uploads hand back the
//! raw response so callers can inspect status and headers, while sketch
//! generation is a narrow single-value contract that extracts the resulting
//! URL directly.

use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::normalize_base_url;
use crate::error::{Error, Result};

const UPLOAD_FALLBACK: &str = "Image upload failed";
const GENERATE_FALLBACK: &str = "Image generation failed";

/// HTTP client for the image service endpoints.
#[derive(Debug, Clone)]
pub struct ImageClient {
    base_url: String,
    client: Client,
}

impl ImageClient {
    /// Build a client for an explicit image service base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            client: Client::builder().build()?,
        })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a caller-built multipart form to the image service.
    ///
    /// Returns the raw response on success; extracting the body is left to
    /// the caller.
    pub async fn upload_image(&self, form: Form) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}/generate-image-file", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(parse_image_error(&body, UPLOAD_FALLBACK)));
        }
        Ok(response)
    }

    /// Generate an image from an uploaded sketch and return its URL.
    pub async fn generate_from_sketch(&self, image_url: &str) -> Result<String> {
        tracing::debug!(image_url, "requesting sketch-to-image generation");
        let response = self
            .client
            .post(format!("{}/generate-image", self.base_url))
            .json(&serde_json::json!({ "image_url": image_url }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(parse_image_error(&body, GENERATE_FALLBACK)));
        }

        let payload = response.json::<GenerateImageResponse>().await?;
        Ok(payload.cloudinary_url)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateImageResponse {
    cloudinary_url: String,
}

#[derive(Debug, Deserialize)]
struct ImageErrorBody {
    error: Option<String>,
}

/// Extract the `error` field from a JSON error body, falling back to an
/// operation-specific message when the body is not parsable JSON or carries
/// no usable field.
fn parse_image_error(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ImageErrorBody>(body) {
        Ok(ImageErrorBody {
            error: Some(message),
        }) if !message.trim().is_empty() => message.trim().to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn sample_form() -> Form {
        Form::new().text("file", "sketch-bytes")
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        assert!(ImageClient::new("images.example.com").is_err());
    }

    #[test]
    fn parse_image_error_extracts_error_field() {
        assert_eq!(
            parse_image_error(r#"{"error":"bad file"}"#, UPLOAD_FALLBACK),
            "bad file"
        );
    }

    #[test]
    fn parse_image_error_falls_back_on_unparsable_body() {
        assert_eq!(parse_image_error("boom", UPLOAD_FALLBACK), UPLOAD_FALLBACK);
        assert_eq!(parse_image_error("", GENERATE_FALLBACK), GENERATE_FALLBACK);
    }

    #[test]
    fn parse_image_error_falls_back_on_missing_error_field() {
        assert_eq!(
            parse_image_error(r#"{"message":"nope"}"#, UPLOAD_FALLBACK),
            UPLOAD_FALLBACK
        );
    }

    #[tokio::test]
    async fn upload_image_returns_raw_response_on_success() {
        let router = Router::new().route(
            "/generate-image-file",
            post(|| async { (StatusCode::OK, "uploaded") }),
        );
        let base_url = spawn_server(router).await;

        let response = ImageClient::new(&base_url)
            .unwrap()
            .upload_image(sample_form())
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "uploaded");
    }

    #[tokio::test]
    async fn upload_image_extracts_json_error_message() {
        let router = Router::new().route(
            "/generate-image-file",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "bad file"})),
                )
            }),
        );
        let base_url = spawn_server(router).await;

        let error = ImageClient::new(&base_url)
            .unwrap()
            .upload_image(sample_form())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "bad file");
    }

    #[tokio::test]
    async fn upload_image_falls_back_on_unparsable_error_body() {
        let router = Router::new().route(
            "/generate-image-file",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base_url = spawn_server(router).await;

        let error = ImageClient::new(&base_url)
            .unwrap()
            .upload_image(sample_form())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Image upload failed");
    }

    #[tokio::test]
    async fn generate_from_sketch_extracts_cloudinary_url() {
        let router = Router::new().route(
            "/generate-image",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"image_url": "https://x/sketch.png"}));
                Json(json!({"cloudinary_url": "https://x/y.png"}))
            }),
        );
        let base_url = spawn_server(router).await;

        let url = ImageClient::new(&base_url)
            .unwrap()
            .generate_from_sketch("https://x/sketch.png")
            .await
            .unwrap();
        assert_eq!(url, "https://x/y.png");
    }

    #[tokio::test]
    async fn generate_from_sketch_surfaces_service_error_message() {
        let router = Router::new().route(
            "/generate-image",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"error": "no sketch detected"})),
                )
            }),
        );
        let base_url = spawn_server(router).await;

        let error = ImageClient::new(&base_url)
            .unwrap()
            .generate_from_sketch("https://x/sketch.png")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "no sketch detected");
    }
}
