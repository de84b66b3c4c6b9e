// crates/hon-i18n-cli/src/api.rs
// ============================================================================
// Module: hOn Mobile API Client
// Description: Anonymous client for fetching vendor translation catalogs.
// Purpose: Resolve a language's full translation catalog via the app-config indirection.
// Dependencies: hon-i18n-core, reqwest, serde, thiserror, url.
// ============================================================================

//! ## Overview
//! The hOn mobile API serves translation catalogs indirectly: a POST to
//! `/app-config` returns an envelope whose `payload.language.jsonPath` names
//! the CDN URL of the full catalog for the requested language; a GET on that
//! URL returns the catalog as one JSON object. Both calls run in the
//! anonymous session, authenticated only by the public mobile-app API key.
//!
//! ## Invariants
//! - Redirects are rejected; the request timeout bounds every call.
//! - Response bodies are read chunk-wise against a hard byte limit.
//! - An envelope without a `jsonPath` yields an empty catalog, not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use hon_i18n_core::JsonMap;
use hon_i18n_core::Language;
use reqwest::Client;
use reqwest::Response;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Public API key embedded in the hOn mobile app for anonymous sessions.
const ANONYMOUS_API_KEY: &str = "GRCqFhC6Gk@ikWXm1RmnSmX1cm,MxM-h";
/// Mobile app version reported in `app-config` requests.
const APP_VERSION: &str = "2.0.10";
/// Operating system reported in `app-config` requests.
const OS: &str = "android";
/// Maximum accepted response body size in bytes.
pub(crate) const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure while talking to the hOn mobile API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("failed to initialize http client: {0}")]
    Client(String),
    /// The request could not be sent or the transfer failed.
    #[error("request to {url} failed: {detail}")]
    Request {
        /// URL of the failed request.
        url: String,
        /// Transport error description.
        detail: String,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        /// URL of the rejected request.
        url: String,
        /// HTTP status code of the response.
        status: u16,
    },
    /// The response body exceeds the accepted size limit.
    #[error("response from {url} exceeds {limit} bytes")]
    TooLarge {
        /// URL of the oversized response.
        url: String,
        /// Accepted body size limit in bytes.
        limit: usize,
    },
    /// The response body is not the expected JSON shape.
    #[error("failed to parse response from {url}: {detail}")]
    Malformed {
        /// URL of the malformed response.
        url: String,
        /// Parser error description.
        detail: String,
    },
    /// The catalog URL announced by the envelope is unusable.
    #[error("catalog url is invalid: {0}")]
    InvalidUrl(String),
}

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// JSON body of the `app-config` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppConfigRequest<'req> {
    /// Mobile app version the request impersonates.
    app_version: &'static str,
    /// Language code the catalog is requested for.
    language_code: &'req str,
    /// Whether beta app configuration is requested.
    beta: bool,
    /// Operating system the request impersonates.
    os: &'static str,
}

/// Envelope wrapping every `app-config` response.
#[derive(Debug, Deserialize)]
struct AppConfigEnvelope {
    /// Application configuration payload.
    #[serde(default)]
    payload: AppConfigPayload,
}

/// The `payload` object of the `app-config` envelope.
#[derive(Debug, Default, Deserialize)]
struct AppConfigPayload {
    /// Language section carrying the catalog location.
    #[serde(default)]
    language: LanguageSection,
}

/// The `payload.language` section of the `app-config` envelope.
#[derive(Debug, Default, Deserialize)]
struct LanguageSection {
    /// CDN URL of the full translation catalog, when published.
    #[serde(rename = "jsonPath")]
    json_path: Option<String>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Anonymous hOn mobile-API client.
///
/// # Invariants
/// - Every request carries the anonymous `x-api-key` header.
/// - The configured endpoint never ends with a `/`.
#[derive(Debug, Clone)]
pub struct HonApiClient {
    /// Underlying HTTP client with redirects disabled.
    client: Client,
    /// Base endpoint of the hOn mobile API, without trailing slash.
    endpoint: String,
}

impl HonApiClient {
    /// Creates an anonymous client for the given endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] when the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static(ANONYMOUS_API_KEY));
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| ApiError::Client(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full translation catalog for a language.
    ///
    /// The catalog location comes from the `app-config` envelope; a language
    /// without a published catalog URL yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failures, non-success statuses,
    /// oversized bodies, and malformed JSON.
    pub async fn translation_catalog(&self, language: Language) -> Result<JsonMap, ApiError> {
        let Some(catalog_url) = self.catalog_url(language).await? else {
            return Ok(JsonMap::new());
        };
        let url = Url::parse(&catalog_url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(ApiError::InvalidUrl(format!("unsupported scheme: {scheme}"))),
        }
        let response = self.client.get(url).send().await.map_err(|err| ApiError::Request {
            url: catalog_url.clone(),
            detail: err.to_string(),
        })?;
        let bytes = read_body_limited(response, &catalog_url).await?;
        parse_object(&bytes, &catalog_url)
    }

    /// Requests the `app-config` envelope and extracts the catalog URL.
    async fn catalog_url(&self, language: Language) -> Result<Option<String>, ApiError> {
        let url = format!("{}/app-config", self.endpoint);
        let request = AppConfigRequest {
            app_version: APP_VERSION,
            language_code: language.as_str(),
            beta: true,
            os: OS,
        };
        let response =
            self.client.post(&url).json(&request).send().await.map_err(|err| ApiError::Request {
                url: url.clone(),
                detail: err.to_string(),
            })?;
        let bytes = read_body_limited(response, &url).await?;
        let envelope: AppConfigEnvelope =
            serde_json::from_slice(&bytes).map_err(|err| ApiError::Malformed {
                url,
                detail: err.to_string(),
            })?;
        Ok(envelope.payload.language.json_path)
    }
}

// ============================================================================
// SECTION: Body Handling
// ============================================================================

/// Reads a response body chunk-wise while enforcing the byte limit.
async fn read_body_limited(mut response: Response, url: &str) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    if let Some(length) = response.content_length()
        && length > MAX_BODY_BYTES as u64
    {
        return Err(ApiError::TooLarge {
            url: url.to_string(),
            limit: MAX_BODY_BYTES,
        });
    }
    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(|err| ApiError::Request {
        url: url.to_string(),
        detail: err.to_string(),
    })? {
        if bytes.len().saturating_add(chunk.len()) > MAX_BODY_BYTES {
            return Err(ApiError::TooLarge {
                url: url.to_string(),
                limit: MAX_BODY_BYTES,
            });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Parses a body as a JSON object document.
fn parse_object(bytes: &[u8], url: &str) -> Result<JsonMap, ApiError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|err| ApiError::Malformed {
        url: url.to_string(),
        detail: err.to_string(),
    })?;
    match document {
        Value::Object(entries) => Ok(entries),
        _ => Err(ApiError::Malformed {
            url: url.to_string(),
            detail: "catalog root must be a JSON object".to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use serde_json::json;

    use super::*;

    #[test]
    fn app_config_request_uses_vendor_field_names() {
        let request = AppConfigRequest {
            app_version: APP_VERSION,
            language_code: "de",
            beta: true,
            os: OS,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "appVersion": "2.0.10",
                "languageCode": "de",
                "beta": true,
                "os": "android"
            })
        );
    }

    #[test]
    fn envelope_extracts_json_path() {
        let envelope: AppConfigEnvelope = serde_json::from_value(json!({
            "payload": {"language": {"jsonPath": "https://cdn.example/translations/de.json"}}
        }))
        .unwrap();
        assert_eq!(
            envelope.payload.language.json_path.as_deref(),
            Some("https://cdn.example/translations/de.json")
        );
    }

    #[test]
    fn envelope_tolerates_missing_sections() {
        for body in [json!({}), json!({"payload": {}}), json!({"payload": {"language": {}}})] {
            let envelope: AppConfigEnvelope = serde_json::from_value(body).unwrap();
            assert!(envelope.payload.language.json_path.is_none());
        }
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let client = HonApiClient::new("http://127.0.0.1:1/", Duration::from_millis(10)).unwrap();
        assert_eq!(client.endpoint, "http://127.0.0.1:1");
    }

    #[test]
    fn object_bodies_parse_and_scalars_do_not() {
        assert!(parse_object(b"{}", "http://x").is_ok());
        assert!(parse_object(b"[]", "http://x").is_err());
        assert!(parse_object(b"not json", "http://x").is_err());
    }
}
