// crates/docmill-api/src/error.rs
// ============================================================================
// Module: Docmill API Client Errors
// Description: Failure modes of the dataset API client itself.
// Purpose: Keep transport and decode failures distinct from application-level
//          envelope codes, which are returned as data.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`ApiClientError`] covers only the failures the client can produce on its
//! own: bad construction input, transport breakdown after retries, and
//! response bodies that do not decode into the shared envelope. A well-formed
//! envelope with a nonzero code is not an error; it is returned to the caller
//! as an [`crate::ApiEnvelope`] for direct assertion.

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors emitted by [`crate::DatasetApiClient`].
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Base URL did not parse or does not use `http`/`https`.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// Underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),

    /// Request payload could not be serialized to JSON.
    #[error("failed to encode request payload: {0}")]
    Encode(String),

    /// Request failed at the transport layer after retries were exhausted.
    #[error("http transport failure: {0}")]
    Transport(String),

    /// Response body was not a well-formed `{code, message, data}` envelope.
    #[error("invalid response envelope: {0}")]
    InvalidResponse(String),

    /// Envelope `data` did not decode into the shape the caller requested.
    #[error("unexpected envelope data: {0}")]
    UnexpectedData(String),
}
