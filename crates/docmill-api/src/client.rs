// crates/docmill-api/src/client.rs
// ============================================================================
// Module: Docmill Dataset API Client
// Description: Async HTTP client for the dataset create, update, list, and
//              delete endpoints.
// Purpose: Drive the dataset API with bounded send retries and a transcript
//          of every exchange for post-mortem artifacts.
// Dependencies: reqwest, serde, serde_json, tokio, url
// ============================================================================

//! ## Overview
//! [`DatasetApiClient`] is deliberately thin: it builds requests, attaches
//! the optional bearer credential, retries transient send failures, and
//! decodes the shared response envelope. It never interprets envelope codes;
//! suites assert on those directly.
//!
//! Invariants:
//! - Transient send failures are retried up to [`MAX_SEND_ATTEMPTS`] times
//!   with linear backoff; anything after a response arrives is never retried.
//! - Every exchange, failed or not, is appended to the shared transcript.
//! - Clones share one transcript, so concurrent workers interleave into a
//!   single ordered history.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tokio::time::sleep;
use url::Url;

use crate::dataset::CreateDatasetRequest;
use crate::dataset::DatasetUpdate;
use crate::dataset::DeleteDatasetsRequest;
use crate::dataset::ListDatasetsQuery;
use crate::envelope::ApiEnvelope;
use crate::error::ApiClientError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum attempts for transient HTTP send failures.
const MAX_SEND_ATTEMPTS: u32 = 3;

/// Base delay for transient send retries; scales linearly with the attempt.
const BASE_SEND_RETRY_DELAY_MS: u64 = 50;

/// Path of the dataset collection endpoints.
const DATASETS_PATH: &str = "/api/v1/datasets";

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One request/response exchange captured by the client.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// One-based position of the exchange in the client's history.
    pub sequence: u64,

    /// Client operation that produced the exchange.
    pub operation: String,

    /// HTTP method of the request.
    pub method: String,

    /// Request path relative to the base URL.
    pub path: String,

    /// Request payload: the body for writes, the query parameters for lists.
    pub request: Value,

    /// Decoded response envelope, or null when no envelope was decoded.
    pub response: Value,

    /// Transport or decode failure, when the exchange produced one.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Async client for the Docmill dataset endpoints.
#[derive(Clone)]
pub struct DatasetApiClient {
    /// Normalized base URL without a trailing slash.
    base_url: String,

    /// Underlying HTTP client with the configured request timeout.
    client: Client,

    /// Bearer credential attached to requests, when one is configured.
    api_key: Option<String>,

    /// Exchange history shared across clones.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl DatasetApiClient {
    /// Creates a client for the deployment at `base_url`.
    ///
    /// The URL is validated up front so a typo fails construction instead of
    /// every request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBaseUrl`] when the URL does not parse
    /// or does not use `http`/`https`, and [`ApiClientError::ClientBuild`]
    /// when the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let parsed =
            Url::parse(base_url).map_err(|err| ApiClientError::InvalidBaseUrl(err.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiClientError::InvalidBaseUrl(format!(
                    "unsupported scheme: {scheme}"
                )));
            }
        }
        if parsed.host_str().is_none() {
            return Err(ApiClientError::InvalidBaseUrl("missing host".to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiClientError::ClientBuild(err.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key: None,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Attaches the bearer credential sent in the `Authorization` header.
    ///
    /// Without a credential the client sends no `Authorization` header at
    /// all, which the auth suites rely on.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the normalized base URL the client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the exchanges recorded so far.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript
            .lock()
            .map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Creates a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure or when the response
    /// is not a well-formed envelope. Application-level failures arrive in
    /// the returned envelope.
    pub async fn create_dataset(
        &self,
        request: &CreateDatasetRequest,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let payload = to_payload(request)?;
        self.send(
            "create_dataset",
            Method::POST,
            DATASETS_PATH,
            RequestPayload::Json(payload),
        )
        .await
    }

    /// Updates a dataset with a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure or when the response
    /// is not a well-formed envelope. Application-level failures arrive in
    /// the returned envelope.
    pub async fn update_dataset(
        &self,
        dataset_id: &str,
        update: &DatasetUpdate,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let payload = to_payload(update)?;
        self.update_dataset_json(dataset_id, payload).await
    }

    /// Updates a dataset with a raw JSON payload.
    ///
    /// Negative tests use this entry point to send field names, types, and
    /// values the typed payload cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure or when the response
    /// is not a well-formed envelope. Application-level failures arrive in
    /// the returned envelope.
    pub async fn update_dataset_json(
        &self,
        dataset_id: &str,
        payload: Value,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let path = format!("{DATASETS_PATH}/{dataset_id}");
        self.send(
            "update_dataset",
            Method::PUT,
            &path,
            RequestPayload::Json(payload),
        )
        .await
    }

    /// Lists datasets matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure or when the response
    /// is not a well-formed envelope. Application-level failures arrive in
    /// the returned envelope.
    pub async fn list_datasets(
        &self,
        query: &ListDatasetsQuery,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let payload = to_payload(query)?;
        self.send(
            "list_datasets",
            Method::GET,
            DATASETS_PATH,
            RequestPayload::Query(payload),
        )
        .await
    }

    /// Deletes the datasets named by the request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure or when the response
    /// is not a well-formed envelope. Application-level failures arrive in
    /// the returned envelope.
    pub async fn delete_datasets(
        &self,
        request: &DeleteDatasetsRequest,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let payload = to_payload(request)?;
        self.send(
            "delete_datasets",
            Method::DELETE,
            DATASETS_PATH,
            RequestPayload::Json(payload),
        )
        .await
    }

    /// Sends one operation, retrying transient send failures, and decodes
    /// the response envelope regardless of the HTTP status line.
    async fn send(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        payload: RequestPayload,
    ) -> Result<ApiEnvelope, ApiClientError> {
        let recorded = payload.recorded();
        let mut attempt: u32 = 0;
        loop {
            attempt = attempt.saturating_add(1);
            let request = self.build_request(&method, path, &payload);
            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    if should_retry_send(&err, attempt) {
                        sleep(retry_delay_for_attempt(attempt)).await;
                        continue;
                    }
                    let failure = ApiClientError::Transport(format!(
                        "send failed after {attempt} attempt(s): {err}"
                    ));
                    self.record(
                        operation,
                        &method,
                        path,
                        recorded,
                        Value::Null,
                        Some(failure.to_string()),
                    );
                    return Err(failure);
                }
            };
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    let failure = ApiClientError::Transport(format!(
                        "failed to read response body: {err}"
                    ));
                    self.record(
                        operation,
                        &method,
                        path,
                        recorded,
                        Value::Null,
                        Some(failure.to_string()),
                    );
                    return Err(failure);
                }
            };
            let envelope: ApiEnvelope = match serde_json::from_str(&body) {
                Ok(envelope) => envelope,
                Err(err) => {
                    let failure = ApiClientError::InvalidResponse(format!(
                        "http status {status}: {err}"
                    ));
                    self.record(
                        operation,
                        &method,
                        path,
                        recorded,
                        Value::Null,
                        Some(failure.to_string()),
                    );
                    return Err(failure);
                }
            };
            let response_value = serde_json::to_value(&envelope).unwrap_or(Value::Null);
            self.record(operation, &method, path, recorded, response_value, None);
            return Ok(envelope);
        }
    }

    /// Builds the request for one attempt, attaching the bearer credential
    /// when one is configured.
    fn build_request(
        &self,
        method: &Method,
        path: &str,
        payload: &RequestPayload,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.client.request(method.clone(), url);
        builder = match payload {
            RequestPayload::Json(body) => builder.json(body),
            RequestPayload::Query(query) => builder.query(query),
        };
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }
        builder
    }

    /// Appends one exchange to the shared transcript.
    fn record(
        &self,
        operation: &str,
        method: &Method,
        path: &str,
        request: Value,
        response: Value,
        error: Option<String>,
    ) {
        if let Ok(mut transcript) = self.transcript.lock() {
            let sequence = u64::try_from(transcript.len())
                .unwrap_or(u64::MAX)
                .saturating_add(1);
            transcript.push(TranscriptEntry {
                sequence,
                operation: operation.to_string(),
                method: method.to_string(),
                path: path.to_string(),
                request,
                response,
                error,
            });
        }
    }
}

// ============================================================================
// SECTION: Payload Placement
// ============================================================================

/// Placement of an operation's payload on the wire.
#[derive(Debug, Clone)]
enum RequestPayload {
    /// JSON request body.
    Json(Value),

    /// URL query parameters.
    Query(Value),
}

impl RequestPayload {
    /// Returns the payload value recorded into the transcript.
    fn recorded(&self) -> Value {
        match self {
            Self::Json(value) | Self::Query(value) => value.clone(),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serializes a request type for the wire and the transcript.
fn to_payload<T: Serialize>(request: &T) -> Result<Value, ApiClientError> {
    serde_json::to_value(request)
        .map_err(|err| ApiClientError::Encode(err.to_string()))
}

/// Returns true when a send failure should be retried.
///
/// Only failures where no response arrived qualify; the classifier accepts
/// connect and timeout errors plus the connection-reset shapes that surface
/// as generic request errors.
fn should_retry_send(err: &reqwest::Error, attempt: u32) -> bool {
    if attempt >= MAX_SEND_ATTEMPTS {
        return false;
    }
    if err.is_connect() || err.is_timeout() {
        return true;
    }
    if !err.is_request() {
        return false;
    }
    let message = err.to_string().to_ascii_lowercase();
    message.contains("connection reset")
        || message.contains("connection refused")
        || message.contains("connection aborted")
        || message.contains("broken pipe")
}

/// Returns the bounded linear backoff delay for a failed attempt.
fn retry_delay_for_attempt(attempt: u32) -> Duration {
    Duration::from_millis(u64::from(attempt) * BASE_SEND_RETRY_DELAY_MS)
}
