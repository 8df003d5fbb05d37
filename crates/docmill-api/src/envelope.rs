// crates/docmill-api/src/envelope.rs
// ============================================================================
// Module: Docmill Response Envelope
// Description: The `{code, message, data}` envelope returned by every dataset
//              endpoint, plus the application-level response codes.
// Purpose: Decode envelopes fail-closed and expose typed accessors for the
//          endpoint-specific `data` payload.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every Docmill dataset endpoint answers with the same envelope. The
//! application-level `code` travels beside the HTTP status line and is the
//! only success signal: validation failures, read-only rejections, and
//! authentication errors all arrive with HTTP 200 and a nonzero `code`.
//!
//! Invariants:
//! - `message` decodes to an empty string when the service omits it.
//! - Typed `data` accessors fail closed on absent or mis-shaped payloads.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::dataset::Dataset;
use crate::error::ApiClientError;

// ============================================================================
// SECTION: Response Codes
// ============================================================================

/// Envelope code for a successful operation.
pub const CODE_SUCCESS: i64 = 0;

/// Envelope code for an unknown payload field or a wrongly typed value.
pub const CODE_FIELD_ERROR: i64 = 100;

/// Envelope code for an update that names a read-only field.
pub const CODE_READONLY_FIELD: i64 = 101;

/// Envelope code for a validation or business-rule violation.
pub const CODE_VALIDATION_ERROR: i64 = 102;

/// Envelope code for an authentication failure.
pub const CODE_AUTH_ERROR: i64 = 109;

// ============================================================================
// SECTION: Envelope
// ============================================================================

/// Response envelope shared by all dataset endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Application-level response code; [`CODE_SUCCESS`] signals success.
    pub code: i64,

    /// Status or error message; empty on most successful operations.
    #[serde(default)]
    pub message: String,

    /// Endpoint-specific payload, when the service returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiEnvelope {
    /// Returns true when the envelope signals application-level success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// Decodes `data` as a single dataset object.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::UnexpectedData`] when `data` is absent or
    /// does not decode into a [`Dataset`].
    pub fn dataset(&self) -> Result<Dataset, ApiClientError> {
        let data = self
            .data
            .clone()
            .ok_or_else(|| ApiClientError::UnexpectedData("envelope carries no data".to_string()))?;
        serde_json::from_value(data)
            .map_err(|err| ApiClientError::UnexpectedData(format!("not a dataset object: {err}")))
    }

    /// Decodes `data` as one page of dataset objects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::UnexpectedData`] when `data` is absent or is
    /// not an array of [`Dataset`] objects.
    pub fn dataset_page(&self) -> Result<Vec<Dataset>, ApiClientError> {
        let data = self
            .data
            .clone()
            .ok_or_else(|| ApiClientError::UnexpectedData("envelope carries no data".to_string()))?;
        serde_json::from_value(data)
            .map_err(|err| ApiClientError::UnexpectedData(format!("not a dataset page: {err}")))
    }
}
